//! # Store Client
//!
//! The handle used to send requests to a `StoreActor`.

use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for a `StoreActor<T>`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be moved
/// into other tasks. The actor stops once every clone has been dropped.
#[derive(Clone)]
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Stores a fully built record under its own id.
    pub async fn insert(&self, record: T) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Insert { record, respond_to })
            .await
    }

    /// Builds a record from `draft` under a store-assigned id and returns it.
    pub async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { draft, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Fetches every known record among `ids`, at most once per id.
    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::GetMany { ids, respond_to })
            .await
    }

    /// Applies `changes` in order as a single all-or-nothing batch and returns
    /// the updated records.
    pub async fn apply(&self, changes: Vec<(T::Id, T::Change)>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Apply {
            changes,
            respond_to,
        })
        .await
    }
}
