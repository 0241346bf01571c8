//! # Catalog Hex
//!
//! Application service layer and HTTP adapter for the product catalog.
//!
//! ## Architecture
//!
//! - `convert` - Applies exchange rates to product prices
//! - `service` - Application service (orchestrates repository and conversion)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: ProductRepository` and
//! `P: ExchangeRateProvider`, so storage and the rate source are injected.

pub mod convert;
pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use convert::PriceConverter;
pub use service::CatalogService;
