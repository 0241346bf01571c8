//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server for the product catalog.

pub(crate) mod handlers;
mod server;

pub use server::HttpServer;
