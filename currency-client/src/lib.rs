//! # Currency Client
//!
//! A typed Rust client for the `currency.Currency` rate service.
//!
//! Every call carries a deadline. An exceeded deadline surfaces as
//! [`ClientError::Timeout`], a refused connection as
//! [`ClientError::Unavailable`].

use std::time::Duration;

use async_trait::async_trait;
use currency_types::{
    CurrencyCode, DESCRIBE_PATH, DescribeResponse, ExchangeError, ExchangeRateProvider,
    GET_RATE_PATH, RateListing, RateRequest, RateResponse, RatesHealth, RpcStatus,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Deadline applied to each call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deadline of {0:?} exceeded")]
    Timeout(Duration),

    #[error("Rate service unreachable: {0}")]
    Unavailable(String),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        message: String,
        rpc_status: Option<RpcStatus>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rate service client.
#[derive(Debug, Clone)]
pub struct RateServiceClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl RateServiceClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Calls `GetRate`: units of `destination` bought by one unit of `base`.
    pub async fn get_rate(
        &self,
        base: CurrencyCode,
        destination: CurrencyCode,
    ) -> Result<f64, ClientError> {
        let req = RateRequest { base, destination };
        let resp: RateResponse = self.post(GET_RATE_PATH, &req).await?;
        Ok(resp.rate)
    }

    /// Fetches the service's method set.
    pub async fn describe(&self) -> Result<DescribeResponse, ClientError> {
        self.get(DESCRIBE_PATH).await
    }

    /// Fetches the published rate table.
    pub async fn list_rates(&self) -> Result<RateListing, ClientError> {
        self.get("/rates").await
    }

    /// Checks whether the service is up and has rates loaded.
    pub async fn health(&self) -> Result<RatesHealth, ClientError> {
        self.get("/health").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let req = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .timeout(self.timeout);
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let req = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .timeout(self.timeout)
            .json(body);
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        req.send().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else if err.is_connect() {
            ClientError::Unavailable(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.classify(e))?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.map_err(|e| self.classify(e))?;
            let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
            let rpc_status = parsed
                .as_ref()
                .and_then(|v| v.get("status").cloned())
                .and_then(|s| serde_json::from_value(s).ok());
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
                rpc_status,
            })
        }
    }
}

impl ClientError {
    /// Converts into the provider error the catalog understands.
    fn into_exchange_error(self, deadline: Duration) -> ExchangeError {
        match self {
            ClientError::Timeout(d) => ExchangeError::Timeout(d),
            ClientError::Unavailable(msg) => ExchangeError::ServiceUnavailable(msg),
            ClientError::Api {
                status, message, ..
            } => match StatusCode::from_u16(status) {
                Ok(StatusCode::NOT_FOUND) => ExchangeError::UnknownCurrency { message },
                Ok(StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT) => {
                    ExchangeError::Timeout(deadline)
                }
                Ok(StatusCode::SERVICE_UNAVAILABLE) => ExchangeError::ServiceUnavailable(message),
                _ => ExchangeError::Rejected { status, message },
            },
            ClientError::Json(e) => ExchangeError::InvalidResponse(e.to_string()),
            ClientError::Http(e) => ExchangeError::ServiceUnavailable(e.to_string()),
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for RateServiceClient {
    #[tracing::instrument(skip(self), fields(url = %self.base_url))]
    async fn get_rate(
        &self,
        base: CurrencyCode,
        destination: CurrencyCode,
    ) -> Result<f64, ExchangeError> {
        RateServiceClient::get_rate(self, base, destination)
            .await
            .map_err(|e| e.into_exchange_error(self.timeout))
            .inspect_err(|e| tracing::warn!(error = %e, "GetRate call failed"))
    }
}
