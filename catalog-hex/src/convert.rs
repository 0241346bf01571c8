//! Price conversion through an exchange rate provider.

use currency_types::{CurrencyCode, ExchangeError, ExchangeRateProvider, Product};

/// Converts catalog prices from the catalog base currency.
///
/// Returned products are copies; the caller's products are never modified.
pub struct PriceConverter<P: ExchangeRateProvider> {
    provider: P,
    base: CurrencyCode,
}

impl<P: ExchangeRateProvider> PriceConverter<P> {
    pub fn new(provider: P, base: CurrencyCode) -> Self {
        Self { provider, base }
    }

    /// The currency stored prices are expressed in.
    pub fn base(&self) -> CurrencyCode {
        self.base
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Prices `product` in `destination`.
    ///
    /// `None` returns the product unchanged without contacting the provider.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id, base = %self.base))]
    pub async fn convert(
        &self,
        product: &Product,
        destination: Option<CurrencyCode>,
    ) -> Result<Product, ExchangeError> {
        let Some(destination) = destination else {
            return Ok(product.clone());
        };

        let rate = self.rate_to(destination).await?;
        apply_rate(product, rate)
    }

    /// Prices every product in `destination` using a single rate lookup.
    #[tracing::instrument(skip(self, products), fields(count = products.len(), base = %self.base))]
    pub async fn convert_all(
        &self,
        products: &[Product],
        destination: Option<CurrencyCode>,
    ) -> Result<Vec<Product>, ExchangeError> {
        let Some(destination) = destination else {
            return Ok(products.to_vec());
        };
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let rate = self.rate_to(destination).await?;
        products.iter().map(|p| apply_rate(p, rate)).collect()
    }

    async fn rate_to(&self, destination: CurrencyCode) -> Result<f64, ExchangeError> {
        let rate = self
            .provider
            .get_rate(self.base, destination)
            .await
            .inspect_err(|e| {
                tracing::error!(currency = %destination, error = %e, "Unable to get rate")
            })?;
        tracing::debug!(currency = %destination, rate, "Rate resolved");
        Ok(rate)
    }
}

fn apply_rate(product: &Product, rate: f64) -> Result<Product, ExchangeError> {
    product.converted(rate).ok_or_else(|| {
        tracing::error!(product_id = %product.id, rate, "Converted price out of range");
        ExchangeError::OutOfRange {
            product: product.id.to_string(),
            rate,
        }
    })
}
