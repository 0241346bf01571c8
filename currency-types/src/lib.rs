//! # Currency Types
//!
//! Wire contract, domain types and port traits shared by the rate service,
//! its client and the catalog that consumes converted prices.
//! This crate performs no IO - only data structures, validation rules and
//! trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Catalog domain types (Product, ProductId)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Request/response shapes for both service boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Product, ProductId};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use exchange_rates::{CurrencyCode, RatesStatus};
pub use ports::{ExchangeError, ExchangeRateProvider, ProductRepository};
