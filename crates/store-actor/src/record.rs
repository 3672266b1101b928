//! # Record Trait
//!
//! The `Record` trait is the contract every stored type (customers, products,
//! orders, ...) implements to be held by a [`StoreActor`](crate::StoreActor).
//! It names the identifier, the draft used when the store assigns the id, and
//! the change type applied by batched updates.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value that can be held and mutated by a `StoreActor`.
///
/// # Associated Types
/// A `Product` record takes a `ProductDraft`-style payload on `create` and a
/// `StockChange`-style payload on `apply`; the compiler keeps a customer draft
/// from ever reaching the product store.
///
/// `Draft` and `Change` are `Clone` so the [`mock`](crate::mock) client can
/// keep a copy of every request it receives.
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier. Converted from the actor's `u32` sequence when
    /// the store assigns ids to drafts.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data needed to build a record whose id is assigned by the store.
    type Draft: Clone + Send + Sync + Debug;

    /// A mutation applied through `StoreClient::apply`.
    type Change: Clone + Send + Sync + Debug;

    /// The error returned when a draft or change is refused.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this record is stored under.
    fn id(&self) -> &Self::Id;

    /// Build the full record from an assigned id and a draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Apply a single change. Returning an error aborts the whole batch the
    /// change belongs to.
    fn apply(&mut self, change: Self::Change) -> Result<(), Self::Error>;
}
