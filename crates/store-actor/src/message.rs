//! # Store Messages
//!
//! The request type sent from a `StoreClient` to its `StoreActor`.

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by a `StoreActor<T>`.
///
/// - **Insert**: store a fully built record under its own id.
/// - **Create**: build a record from a draft under a store-assigned id.
/// - **Get** / **GetMany**: read by id. `GetMany` skips unknown ids and
///   collapses repeated ids.
/// - **Apply**: an all-or-nothing batch of changes.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Insert {
        record: T,
        respond_to: Response<()>,
    },
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Apply {
        changes: Vec<(T::Id, T::Change)>,
        respond_to: Response<Vec<T>>,
    },
}
