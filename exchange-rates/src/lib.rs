//! Exchange Rates Library
//!
//! Ingests a provider's daily rate table into an immutable [`RateTable`] and
//! resolves point-to-point conversion rates from it.
//!
//! Every stored rate is expressed as "units of this currency per one unit of
//! the table's base currency". A cross rate between any two codes is the
//! quotient of their stored rates, so the base denomination never leaks into
//! results.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     VND => ("VND", "₫", "Vietnamese dong"),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{RateResolver, RateTable, RawRate};
//!
//! let table = RateTable::build(
//!     "EUR",
//!     vec![
//!         RawRate::new("USD", "1.10"),
//!         RawRate::new("BRL", "5.50"),
//!     ],
//! )
//! .unwrap();
//!
//! let rate = RateResolver::new(&table).resolve("USD", "BRL").unwrap();
//! assert!((rate - 5.0).abs() < 1e-9);
//! ```

mod ecb;
mod error;
mod feed;
mod resolver;
mod store;
mod table;

pub use ecb::{ECB_DAILY_URL, EcbFeed, parse_ecb_document};
pub use error::{FeedError, RateError, Side, UnknownCurrencyCode};
pub use feed::{FeedSnapshot, RateFeed, load_table};
pub use resolver::RateResolver;
pub use store::{RateStore, RatesStatus};
pub use table::{RateTable, RawRate};

/// Base currency of the ECB reference rates.
pub const ECB_BASE_CURRENCY: CurrencyCode = CurrencyCode::EUR;

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the closed CurrencyCode enumeration and its wire mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currency enumeration shared by both sides of the
/// rate service contract.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CurrencyName => ("CODE", "SYMBOL", "display name"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $label:literal)
        ),* $(,)?
    ) => {
        /// Closed set of currency codes accepted on the wire.
        ///
        /// Serialized as the uppercase ISO code; anything else fails to
        /// deserialize, so unknown codes never reach a rate lookup.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize, utoipa::ToSchema,
        )]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $label),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrencyCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrencyCode(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - codes published in the ECB reference rate set
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    EUR => ("EUR", "€", "Euro"),
    USD => ("USD", "$", "US dollar"),
    JPY => ("JPY", "¥", "Japanese yen"),
    BGN => ("BGN", "лв", "Bulgarian lev"),
    CZK => ("CZK", "Kč", "Czech koruna"),
    DKK => ("DKK", "kr", "Danish krone"),
    GBP => ("GBP", "£", "Pound sterling"),
    HUF => ("HUF", "Ft", "Hungarian forint"),
    PLN => ("PLN", "zł", "Polish zloty"),
    RON => ("RON", "lei", "Romanian leu"),
    SEK => ("SEK", "kr", "Swedish krona"),
    CHF => ("CHF", "Fr", "Swiss franc"),
    ISK => ("ISK", "kr", "Icelandic krona"),
    NOK => ("NOK", "kr", "Norwegian krone"),
    HRK => ("HRK", "kn", "Croatian kuna"),
    RUB => ("RUB", "₽", "Russian rouble"),
    TRY => ("TRY", "₺", "Turkish lira"),
    AUD => ("AUD", "A$", "Australian dollar"),
    BRL => ("BRL", "R$", "Brazilian real"),
    CAD => ("CAD", "C$", "Canadian dollar"),
    CNY => ("CNY", "¥", "Chinese yuan renminbi"),
    HKD => ("HKD", "HK$", "Hong Kong dollar"),
    IDR => ("IDR", "Rp", "Indonesian rupiah"),
    ILS => ("ILS", "₪", "Israeli shekel"),
    INR => ("INR", "₹", "Indian rupee"),
    KRW => ("KRW", "₩", "South Korean won"),
    MXN => ("MXN", "Mex$", "Mexican peso"),
    MYR => ("MYR", "RM", "Malaysian ringgit"),
    NZD => ("NZD", "NZ$", "New Zealand dollar"),
    PHP => ("PHP", "₱", "Philippine peso"),
    SGD => ("SGD", "S$", "Singapore dollar"),
    THB => ("THB", "฿", "Thai baht"),
    ZAR => ("ZAR", "R", "South African rand"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
