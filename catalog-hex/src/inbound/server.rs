//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use currency_types::{ExchangeRateProvider, ProductRepository};

use super::handlers::{self, AppState};
use crate::CatalogService;

/// HTTP Server for the catalog API.
pub struct HttpServer<R: ProductRepository, P: ExchangeRateProvider> {
    state: Arc<AppState<R, P>>,
    allowed_origins: Vec<HeaderValue>,
}

impl<R: ProductRepository, P: ExchangeRateProvider> HttpServer<R, P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: CatalogService<R, P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            allowed_origins: Vec::new(),
        }
    }

    /// Restricts cross-origin requests to `origins`. Empty allows any origin.
    pub fn with_allowed_origins(mut self, origins: Vec<HeaderValue>) -> Self {
        self.allowed_origins = origins;
        self
    }

    fn cors(&self) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.allowed_origins.is_empty() {
            cors.allow_origin(Any)
        } else {
            cors.allow_origin(self.allowed_origins.clone())
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/products",
                get(handlers::list_products::<R, P>).post(handlers::create_product::<R, P>),
            )
            .route(
                "/products/{id}",
                get(handlers::get_product::<R, P>)
                    .put(handlers::update_product::<R, P>)
                    .delete(handlers::delete_product::<R, P>),
            )
            .layer(metrics)
            .layer(self.cors())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address until `shutdown` resolves.
    pub async fn run<S>(self, addr: &str, shutdown: S) -> anyhow::Result<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Catalog listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
