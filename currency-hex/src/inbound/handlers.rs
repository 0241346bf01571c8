//! RPC request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use currency_types::{AppError, RateRequest, RateResponse, RpcErrorBody, RpcStatus};

use crate::RateService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState {
    pub service: RateService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, rpc_status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, RpcStatus::InvalidArgument, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, RpcStatus::NotFound, msg),
            AppError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, RpcStatus::Unavailable, msg)
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, RpcStatus::Unavailable, msg),
            AppError::Timeout(msg) => (
                StatusCode::GATEWAY_TIMEOUT,
                RpcStatus::DeadlineExceeded,
                msg,
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, RpcStatus::Internal, msg)
            }
        };

        let body = RpcErrorBody {
            error: message,
            code: status.as_u16(),
            status: rpc_status,
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint; reports whether rates are loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.health())
}

/// `currency.Currency/GetRate`
pub async fn get_rate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Result<Json<RateResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let response = state.service.get_rate(req)?;
    Ok(Json(response))
}

/// Lists the services and methods this server answers.
pub async fn describe(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.describe())
}

/// Lists the published rate table.
#[tracing::instrument(skip(state))]
pub async fn list_rates(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.listing())
}

/// OpenAPI document for generic tooling.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
