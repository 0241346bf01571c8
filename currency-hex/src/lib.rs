//! # Currency Hex
//!
//! Rate service layer and its remote procedure adapter.
//!
//! ## Architecture
//!
//! - `service/` - RateService (resolves rates against the published table)
//! - `refresh/` - Optional periodic table replacement
//! - `inbound/` - RPC-over-HTTP adapter (Axum server)
//!
//! The service owns an `Arc<RateStore>`; there is no process-wide rate state.

pub mod inbound;
pub mod openapi;
pub mod refresh;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::RateService;
