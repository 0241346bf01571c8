//! OpenAPI description of the rate service.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use currency_types::{
    CurrencyCode, DescribeResponse, MethodDescriptor, RateListing, RateRequest, RateResponse,
    RatesHealth, RpcErrorBody, RpcStatus, ServiceDescriptor,
};
use exchange_rates::RatesStatus;
use utoipa::OpenApi;

// Dummy functions to generate path documentation

/// Rate table health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Ready or degraded", body = RatesHealth)
    )
)]
async fn health() {}

/// Units of `destination` per unit of `base`
#[utoipa::path(
    post,
    path = "/currency.Currency/GetRate",
    tag = "currency.Currency",
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rate resolved", body = RateResponse),
        (status = 400, description = "Malformed request or unknown enum value", body = RpcErrorBody),
        (status = 404, description = "Currency missing from the published table", body = RpcErrorBody),
        (status = 503, description = "No rates loaded", body = RpcErrorBody)
    )
)]
async fn get_rate() {}

/// Services and methods exposed by this server
#[utoipa::path(
    get,
    path = "/describe",
    tag = "introspection",
    responses(
        (status = 200, description = "Method set", body = DescribeResponse)
    )
)]
async fn describe() {}

/// Currently published rate table
#[utoipa::path(
    get,
    path = "/rates",
    tag = "introspection",
    responses(
        (status = 200, description = "Rates against the table base", body = RateListing)
    )
)]
async fn list_rates() {}

/// OpenAPI documentation for the rate service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Rate Service",
        version = "1.0.0",
        description = "Serves exchange rates derived from the European Central Bank daily reference rates.\n\nCall `currency.Currency/GetRate` with a JSON body:\n\n```\n{\"base\": \"USD\", \"destination\": \"BRL\"}\n```",
        license(name = "MIT"),
    ),
    paths(health, get_rate, describe, list_rates),
    components(
        schemas(
            RateRequest,
            RateResponse,
            RpcErrorBody,
            RpcStatus,
            CurrencyCode,
            DescribeResponse,
            ServiceDescriptor,
            MethodDescriptor,
            RateListing,
            RatesHealth,
            RatesStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currency.Currency", description = "Exchange rate procedures"),
        (name = "introspection", description = "Method set and table listing"),
    )
)]
pub struct ApiDoc;
