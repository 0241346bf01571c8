//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use currency_types::{
    AppError, CurrencyCode, CurrencyQuery, ExchangeRateProvider, ProductId, ProductRepository,
    ProductRequest,
};

use crate::CatalogService;

/// Application state shared across handlers.
pub struct AppState<R: ProductRepository, P: ExchangeRateProvider> {
    pub service: CatalogService<R, P>,
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
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_id(id: &str) -> Result<ProductId, AppError> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid product ID: {}", id)))
}

fn parse_currency(query: &CurrencyQuery) -> Result<Option<CurrencyCode>, AppError> {
    query
        .destination()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn parse_body(
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ProductRequest, AppError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all products.
#[tracing::instrument(skip(state))]
pub async fn list_products<R: ProductRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Query(query): Query<CurrencyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let currency = parse_currency(&query)?;
    let products = state.service.list_products(currency).await?;
    Ok(Json(products))
}

/// Get product by ID.
#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn get_product<R: ProductRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
    Query(query): Query<CurrencyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_id(&id)?;
    let currency = parse_currency(&query)?;

    let product = state.service.get_product(product_id, currency).await?;
    Ok(Json(product))
}

/// Create a product.
#[tracing::instrument(skip(state, payload))]
pub async fn create_product<R: ProductRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_body(payload)?;
    let product = state.service.create_product(req).await?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product.
#[tracing::instrument(skip(state, payload), fields(product_id = %id))]
pub async fn update_product<R: ProductRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_id(&id)?;
    let req = parse_body(payload)?;

    let product = state.service.update_product(product_id, req).await?;
    Ok(Json(product))
}

/// Delete a product.
#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn delete_product<R: ProductRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_id(&id)?;
    state.service.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
