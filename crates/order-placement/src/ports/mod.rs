//! # Collaborator Ports
//!
//! The three repositories order placement depends on. The workflow only sees
//! these traits; [`clients`](crate::clients) implements them on top of store
//! actors, and tests substitute mocked stores.

pub mod error;

pub use error::*;

use crate::model::{Customer, CustomerId, NewOrder, Order, Product, ProductId, RequestedProduct};
use async_trait::async_trait;

/// Resolves customer identifiers.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError>;
}

/// Product lookup and stock updates.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns at most one record per id. Unknown ids are skipped, so the
    /// result may be shorter than `ids`.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError>;

    /// Decrements the stock of each product by the given quantity.
    async fn update_quantity(&self, items: &[RequestedProduct]) -> Result<(), RepositoryError>;
}

/// Persists new orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError>;
}
