//! RPC server configuration and startup.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use currency_types::{DESCRIBE_PATH, GET_RATE_PATH};

use super::handlers::{self, AppState};
use crate::RateService;

/// Server-side deadline applied when none is configured.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// RPC server for the rate service.
pub struct RpcServer {
    state: Arc<AppState>,
    request_timeout: Duration,
}

impl RpcServer {
    /// Creates a new server around the given service.
    pub fn new(service: RateService) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets the server-side deadline for each call.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route(GET_RATE_PATH, post(handlers::get_rate))
            .route(DESCRIBE_PATH, get(handlers::describe))
            .route("/rates", get(handlers::list_rates))
            .route("/api-docs/openapi.json", get(handlers::openapi))
            .layer(metrics)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.request_timeout,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address until `shutdown` resolves.
    pub async fn run<S>(self, addr: &str, shutdown: S) -> anyhow::Result<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Rate service listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
