//! Exchange rate provider port.
//!
//! This trait defines how the catalog obtains rates. The production
//! implementation is the rate service client; tests use fixed providers.

use std::time::Duration;

use crate::CurrencyCode;

/// Error type for exchange rate operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    /// The rate service does not know one of the codes; `message` is the
    /// service's own description, passed through unchanged.
    #[error("{message}")]
    UnknownCurrency { message: String },

    #[error("Rate service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Rate request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate service rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid rate response: {0}")]
    InvalidResponse(String),

    /// Applying the rate produced a price that is not a finite number.
    #[error("Price of product {product} is out of range at rate {rate}")]
    OutOfRange { product: String, rate: f64 },
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Returns how many units of `destination` one unit of `base` buys.
    async fn get_rate(
        &self,
        base: CurrencyCode,
        destination: CurrencyCode,
    ) -> Result<f64, ExchangeError>;
}
