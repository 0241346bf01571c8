//! Catalog Application Service
//!
//! Orchestrates product storage through the repository port and price
//! conversion through the exchange rate port.
//! Contains NO infrastructure logic - pure business orchestration.

use currency_types::{
    AppError, CurrencyCode, ExchangeRateProvider, Product, ProductId, ProductRepository,
    ProductRequest,
};

use crate::PriceConverter;

/// Application service for catalog operations.
///
/// Generic over `R: ProductRepository` and `P: ExchangeRateProvider`; both
/// adapters are injected at compile time.
pub struct CatalogService<R: ProductRepository, P: ExchangeRateProvider> {
    repo: R,
    converter: PriceConverter<P>,
}

impl<R: ProductRepository, P: ExchangeRateProvider> CatalogService<R, P> {
    /// Creates a catalog service over `repo`, pricing in `converter.base()`.
    pub fn new(repo: R, converter: PriceConverter<P>) -> Self {
        Self { repo, converter }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn converter(&self) -> &PriceConverter<P> {
        &self.converter
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reads (optionally converted)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all products, priced in `currency` when given.
    pub async fn list_products(
        &self,
        currency: Option<CurrencyCode>,
    ) -> Result<Vec<Product>, AppError> {
        let products = self.repo.list_products().await?;
        Ok(self.converter.convert_all(&products, currency).await?)
    }

    /// Gets a product by ID, priced in `currency` when given.
    pub async fn get_product(
        &self,
        id: ProductId,
        currency: Option<CurrencyCode>,
    ) -> Result<Product, AppError> {
        let product = self
            .repo
            .get_product(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {}", id)))?;
        Ok(self.converter.convert(&product, currency).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Writes (base currency only)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a product.
    pub async fn create_product(&self, req: ProductRequest) -> Result<Product, AppError> {
        self.repo.create_product(req).await.map_err(Into::into)
    }

    /// Replaces a product's editable fields.
    pub async fn update_product(
        &self,
        id: ProductId,
        req: ProductRequest,
    ) -> Result<Product, AppError> {
        self.repo
            .update_product(id, req)
            .await
            .map_err(|e| not_found_as_product(e.into(), id))
    }

    /// Deletes a product.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        self.repo
            .delete_product(id)
            .await
            .map_err(|e| not_found_as_product(e.into(), id))
    }
}

fn not_found_as_product(err: AppError, id: ProductId) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::NotFound(format!("Product {}", id)),
        other => other,
    }
}
