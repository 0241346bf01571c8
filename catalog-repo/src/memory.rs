//! In-memory product repository.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use currency_types::{Product, ProductId, ProductRepository, ProductRequest, RepoError};
use dashmap::DashMap;

/// Product store backed by a concurrent map.
///
/// Ids are handed out from a monotonically increasing counter and are
/// never reused after a delete.
pub struct InMemoryProductRepo {
    products: DashMap<ProductId, Product>,
    next_id: AtomicU64,
}

impl Default for InMemoryProductRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepo {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a repository holding the two house coffees.
    pub fn seeded() -> Result<Self, RepoError> {
        let repo = Self::new();
        for req in seed_products() {
            repo.insert(req)?;
        }
        Ok(repo)
    }

    fn allocate_id(&self) -> Result<ProductId, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(ProductId::new(id)?)
    }

    fn insert(&self, req: ProductRequest) -> Result<Product, RepoError> {
        // Ids are only allocated for valid requests.
        req.validate()?;
        let product = Product::new(self.allocate_id()?, req)?;
        self.products.insert(product.id, product.clone());
        Ok(product)
    }
}

fn seed_products() -> Vec<ProductRequest> {
    vec![
        ProductRequest {
            name: "Latte".into(),
            description: "Frothy milky coffee".into(),
            price: 2.45,
            sku: "abc-def-ghi".into(),
        },
        ProductRequest {
            name: "Espresso".into(),
            description: "Short and strong coffee without milk".into(),
            price: 1.99,
            sku: "fjd-jfk-abc".into(),
        },
    ]
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_product(&self, req: ProductRequest) -> Result<Product, RepoError> {
        let product = self.insert(req)?;
        tracing::debug!(id = %product.id, sku = %product.sku, "Product created");
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        req: ProductRequest,
    ) -> Result<Product, RepoError> {
        let mut entry = self.products.get_mut(&id).ok_or(RepoError::NotFound)?;
        entry.apply(req)?;
        Ok(entry.value().clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), RepoError> {
        self.products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}
