//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of the store. It owns
//! the records of one type and processes requests one at a time, so no lock is
//! ever taken on the record map.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns every record of type `T`.
///
/// **Concurrency Model**:
/// Each `StoreActor` runs in its own Tokio task and handles its requests
/// sequentially. A batch sent through [`StoreClient::apply`] is therefore
/// applied without any other request observing a half-applied state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Use**: clone the client wherever records are read or written.
///
/// ```rust
/// use store_actor::{Record, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Counter { id: u32, value: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter overflow")]
/// struct Overflow;
///
/// impl Record for Counter {
///     type Id = u32;
///     type Draft = u32;
///     type Change = u32;
///     type Error = Overflow;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_draft(id: u32, value: u32) -> Result<Self, Overflow> { Ok(Self { id, value }) }
///     fn apply(&mut self, by: u32) -> Result<(), Overflow> {
///         self.value = self.value.checked_add(by).ok_or(Overflow)?;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Counter>::new(10);
///     tokio::spawn(actor.run());
///
///     let counter = client.create(5).await.unwrap();
///     let updated = client.apply(vec![(counter.id, 2)]).await.unwrap();
///     assert_eq!(updated[0].value, 7);
/// }
/// ```
///
/// ## Operations
///
/// * **Insert**: refuses an id that is already present.
/// * **Create**: takes the next id from the `u32` sequence, skipping ids
///   already taken by `Insert`, calls `T::from_draft` and stores the result.
///   Fails with `IdsExhausted` once the sequence is used up.
/// * **Get** / **GetMany**: return clones. `GetMany` keeps the order of first
///   occurrence and skips ids it does not hold.
/// * **Apply**:
///     1. Copies every touched record into a staging map.
///     2. Applies each change in order against the staged copies.
///     3. Writes the staged copies back only if every change succeeded.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    // `None` once the sequence has handed out `u32::MAX`
    next_id: Option<u32>,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `capacity` bounds the request channel; callers wait when it is full.
    pub fn new(capacity: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: Some(1),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Product" rather than "order_placement::model::product::Product"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { record, respond_to } => {
                    let id = record.id().clone();
                    debug!(record_type, %id, "Insert");
                    if self.records.contains_key(&id) {
                        warn!(record_type, %id, "Already exists");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(id.to_string())));
                        continue;
                    }
                    self.records.insert(id.clone(), record);
                    info!(record_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Create { draft, respond_to } => {
                    debug!(record_type, ?draft, "Create");
                    let _ = respond_to.send(self.create(record_type, draft));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::GetMany { ids, respond_to } => {
                    let mut seen = HashSet::new();
                    let found: Vec<T> = ids
                        .iter()
                        .filter(|id| seen.insert(*id))
                        .filter_map(|id| self.records.get(id).cloned())
                        .collect();
                    debug!(record_type, requested = ids.len(), found = found.len(), "GetMany");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::Apply {
                    changes,
                    respond_to,
                } => {
                    debug!(record_type, ?changes, "Apply");
                    let result = self.apply(changes);
                    match &result {
                        Ok(updated) => info!(record_type, updated = updated.len(), "Apply ok"),
                        Err(e) => warn!(record_type, error = %e, "Apply failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }

    fn create(&mut self, record_type: &str, draft: T::Draft) -> Result<T, StoreError> {
        let id = self.next_free_id().inspect_err(|e| {
            warn!(record_type, error = %e, "Create failed");
        })?;

        let record = T::from_draft(id.clone(), draft).map_err(|e| {
            warn!(record_type, error = %e, "Create failed");
            StoreError::Record(Box::new(e))
        })?;
        self.records.insert(id.clone(), record.clone());
        info!(record_type, %id, size = self.records.len(), "Created");
        Ok(record)
    }

    /// Takes ids from the sequence until one is not held by an inserted record.
    fn next_free_id(&mut self) -> Result<T::Id, StoreError> {
        loop {
            let candidate = self.next_id.ok_or(StoreError::IdsExhausted)?;
            self.next_id = candidate.checked_add(1);
            let id = T::Id::from(candidate);
            if !self.records.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn apply(&mut self, changes: Vec<(T::Id, T::Change)>) -> Result<Vec<T>, StoreError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut touched: Vec<T::Id> = Vec::new();

        for (id, change) in changes {
            if !staged.contains_key(&id) {
                let current = self
                    .records
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                staged.insert(id.clone(), current);
                touched.push(id.clone());
            }
            if let Some(record) = staged.get_mut(&id) {
                record
                    .apply(change)
                    .map_err(|e| StoreError::Record(Box::new(e)))?;
            }
        }

        let mut updated = Vec::with_capacity(touched.len());
        for id in touched {
            if let Some(record) = staged.remove(&id) {
                updated.push(record.clone());
                self.records.insert(id, record);
            }
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Record for Note {
        type Id = u32;
        type Draft = String;
        type Change = Infallible;
        type Error = Infallible;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_draft(id: u32, text: String) -> Result<Self, Infallible> {
            Ok(Self { id, text })
        }

        fn apply(&mut self, change: Infallible) -> Result<(), Infallible> {
            match change {}
        }
    }

    #[test]
    fn test_sequence_ends_at_u32_max() {
        let (mut actor, _client) = StoreActor::<Note>::new(1);
        actor.next_id = Some(u32::MAX);

        let last = actor.create("Note", "last".to_string()).unwrap();
        assert_eq!(last.id, u32::MAX);

        let result = actor.create("Note", "one too many".to_string());
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert_eq!(actor.records.len(), 1);
    }

    #[test]
    fn test_exhaustion_while_skipping_inserted_ids() {
        let (mut actor, _client) = StoreActor::<Note>::new(1);
        actor.next_id = Some(u32::MAX);
        actor.records.insert(
            u32::MAX,
            Note {
                id: u32::MAX,
                text: "inserted".to_string(),
            },
        );

        let result = actor.create("Note", "draft".to_string());
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert_eq!(actor.records[&u32::MAX].text, "inserted");
    }
}
