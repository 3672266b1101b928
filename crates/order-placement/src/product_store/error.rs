//! Error types for the Product store.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Restocking would overflow the stock counter.
    #[error("Stock overflow for {0}")]
    StockOverflow(ProductId),

    /// Price is negative or not a number.
    #[error("Invalid price for {product_id}: {price}")]
    InvalidPrice { product_id: ProductId, price: f64 },
}
