//! Typed wrappers around [`StoreClient`](store_actor::StoreClient) that
//! implement the [`ports`](crate::ports).

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;

use crate::ports::RepositoryError;
use store_actor::StoreError;

/// Maps store failures onto the repository error every port returns.
pub(crate) fn repository_error(e: StoreError) -> RepositoryError {
    match e {
        StoreError::ActorClosed | StoreError::ActorDropped | StoreError::IdsExhausted => {
            RepositoryError::Unavailable(e.to_string())
        }
        StoreError::NotFound(id) => RepositoryError::NotFound(id),
        StoreError::AlreadyExists(id) => RepositoryError::Conflict(id),
        StoreError::Record(inner) => RepositoryError::Other(inner),
    }
}
