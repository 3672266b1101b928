//! # RecordClient Trait
//!
//! A common interface for typed store clients, adding default `find` and
//! `find_many` methods on top of a generic `StoreClient`.
use crate::{Record, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for typed clients that wrap a [`StoreClient`].
///
/// Implementors only supply access to the inner client and an error mapping;
/// the read operations come for free.
///
/// # Example
///
/// ```rust
/// use store_actor::{Record, RecordClient, StoreClient, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tags are immutable")]
/// struct Immutable;
///
/// impl Record for Tag {
///     type Id = u32;
///     type Draft = String;
///     type Change = ();
///     type Error = Immutable;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_draft(id: u32, label: String) -> Result<Self, Immutable> { Ok(Self { id, label }) }
///     fn apply(&mut self, _: ()) -> Result<(), Immutable> { Err(Immutable) }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag store failed: {0}")]
/// struct TagError(String);
///
/// struct TagClient {
///     inner: StoreClient<Tag>,
/// }
///
/// impl RecordClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &StoreClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> TagError {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // find() and find_many() are provided
///     let _ = client.find(1).await;
///     let _ = client.find_many(vec![1, 2]).await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The error type of the typed client.
    type Error: Send + Sync;

    /// Access the inner generic `StoreClient`.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the typed client's error.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every known record among `ids`.
    #[tracing::instrument(skip(self))]
    async fn find_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_many(ids).await.map_err(Self::map_error)
    }
}
