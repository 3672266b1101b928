//! # Store Actor
//!
//! In-memory record stores run as Tokio actors. Each store owns every record of
//! one type and answers requests sequentially, which gives callers two
//! guarantees without any locking:
//!
//! - a read never observes a half-applied batch;
//! - a batch of changes ([`StoreClient::apply`]) is all-or-nothing.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]): the stored type, its id, draft and change types.
//! 2. **Runtime Layer** ([`StoreActor`]): the request loop that owns the records.
//! 3. **Interface Layer** ([`StoreClient`], [`RecordClient`]): typed async handles.
//!
//! ```rust
//! use store_actor::{Record, StoreActor, StoreError};
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, items: u32 }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("shelf {0} would go negative")]
//! struct Empty(u32);
//!
//! impl Record for Shelf {
//!     type Id = u32;
//!     type Draft = u32;
//!     type Change = u32;
//!     type Error = Empty;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_draft(id: u32, items: u32) -> Result<Self, Empty> { Ok(Self { id, items }) }
//!     fn apply(&mut self, take: u32) -> Result<(), Empty> {
//!         self.items = self.items.checked_sub(take).ok_or(Empty(self.id))?;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client.insert(Shelf { id: 1, items: 3 }).await.unwrap();
//!     client.insert(Shelf { id: 2, items: 1 }).await.unwrap();
//!
//!     // shelf 2 cannot give 2, so shelf 1 keeps its 3 items as well
//!     let result = client.apply(vec![(1, 1), (2, 2)]).await;
//!     assert!(matches!(result, Err(StoreError::Record(_))));
//!     assert_eq!(client.get(1).await.unwrap().unwrap().items, 3);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations and records
//! what it received. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::Record;
