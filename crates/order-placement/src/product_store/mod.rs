//! # Product Store
//!
//! The product catalog, run as a [`StoreActor`]. Besides lookups it applies
//! [`StockChange`] batches; because the actor handles one request at a time, a
//! decrement batch either fits the stock of every product it names or changes
//! nothing.
//!
//! - [`record`] - [`Record`](store_actor::Record) implementation for [`Product`]
//! - [`error`] - [`ProductError`] for refused drafts and changes
//! - [`changes`] - [`StockChange`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use order_placement::model::{Product, RequestedProduct};
//! use order_placement::ports::ProductCatalog;
//! use order_placement::product_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client.add_product(Product::new("p1", "Widget", 29.99, 100)).await?;
//!     client.update_quantity(&[RequestedProduct::new("p1", 5)]).await?;
//!     assert_eq!(client.check_stock("p1".into()).await?, Some(95));
//!     Ok(())
//! }
//! ```

pub mod changes;
pub mod error;
pub mod record;

pub use changes::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use store_actor::StoreActor;

/// Creates a new Product store actor and its client.
pub fn new(capacity: usize) -> (StoreActor<Product>, ProductClient) {
    let (actor, inner) = StoreActor::new(capacity);
    (actor, ProductClient::new(inner))
}
