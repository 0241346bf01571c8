//! Error types for rate ingestion and resolution.

use std::fmt;

/// Which side of a rate request failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Base,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Base => write!(f, "base"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// Errors raised while resolving a rate against a table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    #[error("Rate not found for {side} currency {code}")]
    UnknownCurrency { code: String, side: Side },

    #[error("No exchange rates are loaded")]
    NoRates,

    #[error("Rate from {base} to {destination} is out of range")]
    OutOfRange { base: String, destination: String },
}

impl RateError {
    /// The currency code that could not be resolved, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            RateError::UnknownCurrency { code, .. } => Some(code),
            RateError::NoRates | RateError::OutOfRange { .. } => None,
        }
    }
}

/// Errors raised while fetching or ingesting a rate feed.
///
/// Any of these leaves the currently published table untouched.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Rate feed unavailable: {0}")]
    Unavailable(String),

    #[error("Rate feed returned status {0}")]
    BadStatus(u16),

    #[error("Rate feed document is malformed: {0}")]
    Malformed(String),

    #[error("Invalid rate {value:?} for currency {currency}")]
    Parse { currency: String, value: String },

    #[error("Rate for currency {currency} must be a positive number, got {rate}")]
    InvalidRate { currency: String, rate: f64 },

    #[error("Rate feed contained no rates")]
    Empty,
}

/// Textual code outside the [`crate::CurrencyCode`] enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrencyCode(pub String);
