//! Product repository port.
//!
//! The catalog's storage adapter implements this trait. Reads return
//! copies; nothing handed out by the repository aliases stored state.

use crate::domain::{Product, ProductId};
use crate::dto::ProductRequest;
use crate::error::RepoError;

#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Lists all products ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, RepoError>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError>;

    /// Creates a product under the next free id.
    async fn create_product(&self, req: ProductRequest) -> Result<Product, RepoError>;

    /// Replaces a product's editable fields. Fails with `NotFound` when absent.
    async fn update_product(&self, id: ProductId, req: ProductRequest)
    -> Result<Product, RepoError>;

    /// Removes a product. Fails with `NotFound` when absent.
    async fn delete_product(&self, id: ProductId) -> Result<(), RepoError>;
}
