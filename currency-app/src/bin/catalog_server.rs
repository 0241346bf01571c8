//! # Catalog Service
//!
//! Binary that wires together the product catalog:
//! - Load configuration from environment
//! - Create the rate service client and price converter
//! - Start the HTTP server

use anyhow::Context;
use axum::http::HeaderValue;

use catalog_hex::{CatalogService, PriceConverter, inbound::HttpServer};
use catalog_repo::InMemoryProductRepo;
use currency_app::{config::CatalogConfig, shutdown::shutdown_signal, telemetry};
use currency_client::RateServiceClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let telemetry = telemetry::init(
        "catalog-service",
        "info,currency_app=debug,catalog_hex=debug,currency_client=debug",
    )?;

    // Load configuration
    let config = CatalogConfig::from_env()?;

    tracing::info!("Starting catalog on port {}", config.port);
    tracing::info!(
        "Using rate service: {} (base currency {})",
        config.currency_service_url,
        config.base_currency
    );

    let client =
        RateServiceClient::new(&config.currency_service_url).with_timeout(config.rate_call_timeout);
    let converter = PriceConverter::new(client, config.base_currency);
    let repo = InMemoryProductRepo::seeded()?;

    let origins = config
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let server =
        HttpServer::new(CatalogService::new(repo, converter)).with_allowed_origins(origins);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr, shutdown_signal()).await?;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
