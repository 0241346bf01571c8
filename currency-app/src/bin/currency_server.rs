//! # Currency Rate Service
//!
//! Binary that wires together the rate service:
//! - Load configuration from environment
//! - Fetch the initial rate table (before binding)
//! - Optionally start periodic refresh
//! - Start the RPC server

use std::sync::Arc;

use currency_app::{
    config::RateServiceConfig, shutdown::shutdown_signal, startup::load_initial_rates, telemetry,
};
use currency_hex::{RateService, inbound::RpcServer, refresh::spawn_refresh};
use exchange_rates::{EcbFeed, RateFeed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let telemetry = telemetry::init(
        "currency-service",
        "info,currency_app=debug,currency_hex=debug,exchange_rates=debug",
    )?;

    // Load configuration
    let config = RateServiceConfig::from_env()?;

    tracing::info!("Starting rate service on port {}", config.port);
    tracing::info!("Using rate feed: {}", config.feed_url);

    let feed: Arc<dyn RateFeed> = Arc::new(EcbFeed::new(&config.feed_url, config.feed_timeout)?);

    // Rates are in place (or deliberately absent) before the listener exists
    let store = Arc::new(load_initial_rates(feed.as_ref(), config.allow_empty_rates).await?);

    let refresh = config.refresh_interval.map(|period| {
        tracing::info!(?period, "Periodic rate refresh enabled");
        spawn_refresh(Arc::clone(&store), Arc::clone(&feed), period)
    });

    let service = RateService::new(store);
    let server = RpcServer::new(service).with_request_timeout(config.request_timeout);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr, shutdown_signal()).await?;

    if let Some(handle) = refresh {
        handle.abort();
    }

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
