//! # Order Placement Workflow
//!
//! Places an order in one linear pass:
//!
//! 1. check the request shape (non-empty, positive quantities, duplicates per
//!    [`DuplicateLinePolicy`](crate::config::DuplicateLinePolicy));
//! 2. resolve the customer;
//! 3. resolve every distinct product;
//! 4. check stock and price each line from the catalog;
//! 5. persist the order and decrement stock, in the order chosen by
//!    [`StockCommit`](crate::config::StockCommit);
//! 6. return the stored order.
//!
//! Steps 1 to 4 fail without writing anything. Collaborator calls are awaited
//! one after another, never concurrently.

pub mod error;
pub mod placement;

pub use error::*;
pub use placement::*;
