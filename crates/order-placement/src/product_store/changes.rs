//! Stock changes applied to [`Product`](crate::model::Product) records.
//!
//! Changes are sent in batches through
//! [`StoreClient::apply`](store_actor::StoreClient::apply); a batch is applied
//! whole or not at all.

/// A change to a product's available stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// Takes units out of stock.
    ///
    /// # Errors
    /// Fails if the amount exceeds available stock.
    Decrement(u32),
    /// Puts units back into stock.
    Restock(u32),
}
