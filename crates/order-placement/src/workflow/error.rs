//! Error types for order placement.

use crate::model::{CustomerId, ProductId};
use crate::ports::RepositoryError;
use thiserror::Error;

/// Why an order could not be placed.
///
/// Every variant except `Repository` is a validation failure: nothing was
/// persisted and no stock was touched.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// The customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// One or more requested products do not exist. `missing` lists the ids
    /// that could be identified, and may be empty if the catalog returned an
    /// unexpected set.
    #[error("Product not found: {missing:?}")]
    ProductNotFound { missing: Vec<ProductId> },

    /// A requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The request has no lines.
    #[error("Order has no products")]
    EmptyOrder,

    /// A line asks for zero units, or merged lines overflow.
    #[error("Invalid quantity for product {0}")]
    InvalidQuantity(ProductId),

    /// The same product appears on more than one line.
    #[error("Duplicate product in order: {0}")]
    DuplicateProduct(ProductId),

    /// A collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
