//! # Customer Store
//!
//! The customer directory, run as a [`StoreActor`].
//!
//! - [`record`] - [`Record`](store_actor::Record) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] returned for invalid customer data
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use order_placement::customer_store;
//! use order_placement::model::CustomerDraft;
//! use order_placement::ports::CustomerDirectory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let alice = client
//!         .register(CustomerDraft {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     assert!(client.find_by_id(&alice.id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod record;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use store_actor::StoreActor;

/// Creates a new Customer store actor and its client.
pub fn new(capacity: usize) -> (StoreActor<Customer>, CustomerClient) {
    let (actor, inner) = StoreActor::new(capacity);
    (actor, CustomerClient::new(inner))
}
