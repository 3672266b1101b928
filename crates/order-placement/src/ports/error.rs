//! Errors reported by repository collaborators.

use crate::model::ProductId;
use thiserror::Error;

/// Errors a repository can return. Order placement passes them through
/// untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store cannot be reached.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    /// A write referenced a record that does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A write collided with an existing record.
    #[error("Record already exists: {0}")]
    Conflict(String),

    /// A stock decrement would take a product below zero.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
