//! Product domain model.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::ProductRequest;
use crate::error::DomainError;

static SKU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+-[a-z]+-[a-z]+$").expect("SKU pattern is valid"));

/// Unique, positive identifier for a Product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a ProductId, rejecting zero.
    pub fn new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidProductId(id.to_string()));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .parse()
            .map_err(|_| DomainError::InvalidProductId(s.to_string()))?;
        Self::new(id)
    }
}

/// A catalog item priced in the catalog's base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    #[schema(example = "Latte")]
    pub name: String,
    #[schema(example = "Frothy milky coffee")]
    pub description: String,
    /// Price in the catalog base currency, or in the requested currency
    /// when read with conversion.
    #[schema(example = 2.45)]
    pub price: f64,
    #[schema(example = "abc-def-ghi")]
    pub sku: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product from a validated request.
    pub fn new(id: ProductId, req: ProductRequest) -> Result<Self, DomainError> {
        req.validate()?;
        let now = Utc::now();

        Ok(Self {
            id,
            name: req.name,
            description: req.description,
            price: req.price,
            sku: req.sku,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the editable fields, keeping id and creation time.
    pub fn apply(&mut self, req: ProductRequest) -> Result<(), DomainError> {
        req.validate()?;
        self.name = req.name;
        self.description = req.description;
        self.price = req.price;
        self.sku = req.sku;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns a copy priced at `price * rate`; `self` is left untouched.
    ///
    /// `None` when the converted price is not a positive finite number.
    pub fn converted(&self, rate: f64) -> Option<Product> {
        let price = self.price * rate;
        if !price.is_finite() || price <= 0.0 {
            return None;
        }
        Some(Product {
            price,
            ..self.clone()
        })
    }
}

impl ProductRequest {
    /// Checks name length, price positivity and SKU format.
    pub fn validate(&self) -> Result<(), DomainError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err(DomainError::ValidationError("name is required".into()));
        }
        if !(3..=50).contains(&name_len) {
            return Err(DomainError::ValidationError(
                "name must be between 3 and 50 characters".into(),
            ));
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DomainError::ValidationError(
                "price must be greater than zero".into(),
            ));
        }

        if !SKU_PATTERN.is_match(&self.sku) {
            return Err(DomainError::ValidationError(format!(
                "sku {:?} must look like abc-def-ghi",
                self.sku
            )));
        }

        Ok(())
    }
}
