//! # Currency Application
//!
//! Wiring shared by the `currency-server` and `catalog-server` binaries:
//! - Configuration loading from environment
//! - Tracing and OpenTelemetry setup
//! - Initial rate table load with the startup policy applied
//! - The shutdown signal both servers stop on

pub mod config;
pub mod shutdown;
pub mod startup;
pub mod telemetry;
