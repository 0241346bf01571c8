//! Rate Application Service
//!
//! Maps `GetRate` calls onto the resolver. Holds no per-call state, so any
//! number of calls may run concurrently against the same store.

use std::sync::Arc;

use currency_types::{
    AppError, CURRENCY_SERVICE, CurrencyCode, DescribeResponse, GET_RATE_PATH, MethodDescriptor,
    RateListing, RateRequest, RateResponse, RatesHealth, ServiceDescriptor,
};
use exchange_rates::{RateResolver, RateStore};

/// Application service behind the `currency.Currency` RPC surface.
pub struct RateService {
    store: Arc<RateStore>,
}

impl RateService {
    /// Creates a rate service reading from `store`.
    pub fn new(store: Arc<RateStore>) -> Self {
        Self { store }
    }

    /// Returns the store this service reads from.
    pub fn store(&self) -> &Arc<RateStore> {
        &self.store
    }

    /// Resolves `destination` units per `base` unit against the current table.
    #[tracing::instrument(skip(self), fields(base = %req.base, destination = %req.destination))]
    pub fn get_rate(&self, req: RateRequest) -> Result<RateResponse, AppError> {
        tracing::info!("Handle request for GetRate");

        let table = self.store.snapshot();
        let rate = RateResolver::new(&table)
            .resolve_codes(req.base, req.destination)
            .inspect_err(|e| tracing::warn!(error = %e, "GetRate failed"))?;

        Ok(RateResponse { rate })
    }

    /// Describes the callable method set.
    pub fn describe(&self) -> DescribeResponse {
        DescribeResponse {
            services: vec![ServiceDescriptor {
                name: CURRENCY_SERVICE.to_string(),
                methods: vec![MethodDescriptor {
                    name: "GetRate".to_string(),
                    path: GET_RATE_PATH.to_string(),
                    request: "RateRequest".to_string(),
                    response: "RateResponse".to_string(),
                }],
            }],
            currencies: CurrencyCode::all().to_vec(),
        }
    }

    /// Lists the published table.
    pub fn listing(&self) -> RateListing {
        let table = self.store.snapshot();
        RateListing {
            base: table.base().to_string(),
            published: table.published(),
            rates: table
                .iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }

    pub fn health(&self) -> RatesHealth {
        let table = self.store.snapshot();
        RatesHealth {
            status: self.store.status(),
            currencies: table.len(),
            published: table.published(),
        }
    }
}
