//! # Store Errors
//!
//! Errors raised by the store actor and its clients.

/// Errors that can occur while talking to a `StoreActor`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
    #[error("Store has no ids left to assign")]
    IdsExhausted,
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Returns the record-level error if this is one, downcast to `E`.
    pub fn record_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            StoreError::Record(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
