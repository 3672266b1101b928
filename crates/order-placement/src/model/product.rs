//! Catalog products.
//!
//! [`Product`] implements [`Record`](store_actor::Record) (see
//! [`product_store`](crate::product_store)):
//! - Creation parameters ([`ProductDraft`])
//! - Changes ([`StockChange`](crate::product_store::StockChange))

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(format!("product_{}", id))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, copied into line items at lookup time.
    pub price: f64,
    /// Available stock.
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name
    /// * `price` - Unit price, non-negative
    /// * `quantity` - Available stock quantity
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Payload for adding a product under a store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}
