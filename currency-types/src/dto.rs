//! Data Transfer Objects (DTOs) for both service boundaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use exchange_rates::{CurrencyCode, RatesStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Rate Service Contract
// ─────────────────────────────────────────────────────────────────────────────

/// Fully qualified name of the rate service.
pub const CURRENCY_SERVICE: &str = "currency.Currency";

/// Route of the `GetRate` procedure.
pub const GET_RATE_PATH: &str = "/currency.Currency/GetRate";

/// Route of the introspection endpoint.
pub const DESCRIBE_PATH: &str = "/describe";

/// Request for the rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RateRequest {
    pub base: CurrencyCode,
    pub destination: CurrencyCode,
}

/// Units of `destination` bought by one unit of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateResponse {
    #[schema(example = 1.0887)]
    pub rate: f64,
}

/// Status class of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcStatus {
    InvalidArgument,
    NotFound,
    Unavailable,
    DeadlineExceeded,
    Internal,
}

/// Error body returned by the rate service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RpcErrorBody {
    /// Human readable message, e.g. which side of the request was unknown
    #[schema(example = "Rate not found for destination currency RUB")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub code: u16,
    pub status: RpcStatus,
}

/// One callable method of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MethodDescriptor {
    #[schema(example = "GetRate")]
    pub name: String,
    #[schema(example = "/currency.Currency/GetRate")]
    pub path: String,
    #[schema(example = "RateRequest")]
    pub request: String,
    #[schema(example = "RateResponse")]
    pub response: String,
}

/// A service and its method set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceDescriptor {
    #[schema(example = "currency.Currency")]
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
}

/// Introspection document served by the rate service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DescribeResponse {
    pub services: Vec<ServiceDescriptor>,
    /// Values accepted for `base` and `destination`
    pub currencies: Vec<CurrencyCode>,
}

/// The currently published rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateListing {
    #[schema(example = "EUR")]
    pub base: String,
    #[schema(value_type = Option<String>, example = "2024-03-15")]
    pub published: Option<NaiveDate>,
    pub rates: BTreeMap<String, f64>,
}

/// Health of the rate service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatesHealth {
    pub status: RatesStatus,
    /// Number of currencies in the published table
    pub currencies: usize,
    #[schema(value_type = Option<String>, example = "2024-03-15")]
    pub published: Option<NaiveDate>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "Latte")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Frothy milky coffee")]
    pub description: String,
    /// Price in the catalog base currency
    #[schema(example = 2.45)]
    pub price: f64,
    #[schema(example = "abc-def-ghi")]
    pub sku: String,
}

/// Optional destination currency for catalog reads.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CurrencyQuery {
    /// ISO code to convert prices into; omit for base-currency prices
    pub currency: Option<String>,
}

impl CurrencyQuery {
    /// Parses the requested currency.
    ///
    /// Absent and blank values mean "no conversion"; anything else must be
    /// a known code.
    pub fn destination(&self) -> Result<Option<CurrencyCode>, exchange_rates::UnknownCurrencyCode> {
        match self.currency.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_request_wire_format() {
        let req = RateRequest {
            base: CurrencyCode::EUR,
            destination: CurrencyCode::BRL,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"base":"EUR","destination":"BRL"}"#);
    }

    #[test]
    fn test_rate_request_rejects_unknown_code() {
        let result = serde_json::from_str::<RateRequest>(r#"{"base":"EUR","destination":"ZZZ"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rpc_status_wire_format() {
        let json = serde_json::to_string(&RpcStatus::DeadlineExceeded).unwrap();
        assert_eq!(json, "\"DEADLINE_EXCEEDED\"");
    }

    #[test]
    fn test_currency_query_destination() {
        let none = CurrencyQuery { currency: None };
        assert_eq!(none.destination().unwrap(), None);

        let blank = CurrencyQuery {
            currency: Some("  ".into()),
        };
        assert_eq!(blank.destination().unwrap(), None);

        let brl = CurrencyQuery {
            currency: Some("brl".into()),
        };
        assert_eq!(brl.destination().unwrap(), Some(CurrencyCode::BRL));

        let unknown = CurrencyQuery {
            currency: Some("ZZZ".into()),
        };
        assert!(unknown.destination().is_err());
    }
}
