//! RPC Inbound Adapter
//!
//! Axum-based server exposing `currency.Currency/GetRate` as a JSON
//! procedure call, plus introspection and health routes.

pub(crate) mod handlers;
mod server;

pub use server::RpcServer;
