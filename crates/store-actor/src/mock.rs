//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real `StoreClient<T>` whose requests are answered
//! from a queue of expectations instead of a running `StoreActor`. Every request
//! is also recorded, so tests can assert which calls were made and with what
//! payload.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real StoreActor |
//! |---------|------------|-----------------|
//! | **State** | None, answers are scripted | Real records |
//! | **Call assertions** | `received()` log | Not available |
//! | **Error Injection** | `return_err` | Needs a failing record |
//! | **Use Case** | Logic *around* the store | The store itself or the full system |
//!
//! ## Example
//!
//! ```rust
//! use store_actor::mock::{MockClient, Received};
//! use store_actor::{Record, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Item { id: u32, stock: u32 }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("out of stock")]
//! struct OutOfStock;
//!
//! impl Record for Item {
//!     type Id = u32;
//!     type Draft = u32;
//!     type Change = u32;
//!     type Error = OutOfStock;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_draft(id: u32, stock: u32) -> Result<Self, OutOfStock> { Ok(Self { id, stock }) }
//!     fn apply(&mut self, take: u32) -> Result<(), OutOfStock> {
//!         self.stock = self.stock.checked_sub(take).ok_or(OutOfStock)?;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1, stock: 4 }));
//!     mock.expect_apply().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().stock, 4);
//!     assert!(client.apply(vec![(1, 2)]).await.is_err());
//!
//!     mock.verify();
//!     assert_eq!(mock.received()[1], Received::Apply { changes: vec![(1, 2)] });
//! }
//! ```
//!
//! A request that arrives with no expectation left is still recorded, but its
//! response channel is dropped, so the caller sees [`StoreError::ActorDropped`].

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::warn;

/// A scripted answer to the next request.
enum Expectation<T: Record> {
    Insert(Result<(), StoreError>),
    Create(Result<T, StoreError>),
    Get(Result<Option<T>, StoreError>),
    GetMany(Result<Vec<T>, StoreError>),
    Apply(Result<Vec<T>, StoreError>),
}

/// A copy of a request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum Received<T: Record> {
    Insert { record: T },
    Create { draft: T::Draft },
    Get { id: T::Id },
    GetMany { ids: Vec<T::Id> },
    Apply { changes: Vec<(T::Id, T::Change)> },
}

type Shared<V> = Arc<Mutex<V>>;

/// A mock store with expectation tracking.
pub struct MockClient<T: Record> {
    client: StoreClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    received: Shared<Vec<Received<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::new(Mutex::new(VecDeque::new()));
        let received: Shared<Vec<Received<T>>> = Arc::new(Mutex::new(Vec::new()));
        let task_expectations = expectations.clone();
        let task_received = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_expectations).pop_front();
                let copy = match &request {
                    StoreRequest::Insert { record, .. } => Received::Insert {
                        record: record.clone(),
                    },
                    StoreRequest::Create { draft, .. } => Received::Create {
                        draft: draft.clone(),
                    },
                    StoreRequest::Get { id, .. } => Received::Get { id: id.clone() },
                    StoreRequest::GetMany { ids, .. } => Received::GetMany { ids: ids.clone() },
                    StoreRequest::Apply { changes, .. } => Received::Apply {
                        changes: changes.clone(),
                    },
                };
                lock(&task_received).push(copy);

                match (request, expectation) {
                    (StoreRequest::Insert { respond_to, .. }, Some(Expectation::Insert(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::GetMany { respond_to, .. }, Some(Expectation::GetMany(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Apply { respond_to, .. }, Some(Expectation::Apply(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (_, None) => warn!("Unexpected request, no expectation left"),
                    (_, Some(_)) => panic!("Request does not match the next expectation"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Insert)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    /// Expects a `get`. The id documents the test; it is not matched.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::GetMany)
    }

    pub fn expect_apply(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::Apply)
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn received(&self) -> Vec<Received<T>> {
        lock(&self.received).clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: Record, R> {
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    /// Answer the request with `value`.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// A panicking test thread poisons the lock; the data is still usable.
fn lock<V>(shared: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        id: u32,
        balance: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("insufficient funds")]
    struct InsufficientFunds;

    impl Record for Account {
        type Id = u32;
        type Draft = u32;
        type Change = u32;
        type Error = InsufficientFunds;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_draft(id: u32, balance: u32) -> Result<Self, Self::Error> {
            Ok(Self { id, balance })
        }

        fn apply(&mut self, debit: u32) -> Result<(), Self::Error> {
            self.balance = self.balance.checked_sub(debit).ok_or(InsufficientFunds)?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order_and_records_requests() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(Account { id: 1, balance: 50 });
        mock.expect_get_many()
            .return_ok(vec![Account { id: 1, balance: 50 }]);

        let client = mock.client();
        let created = client.create(50).await.unwrap();
        assert_eq!(created.id, 1);

        let found = client.get_many(vec![1, 2]).await.unwrap();
        assert_eq!(found.len(), 1);

        mock.verify();
        assert_eq!(
            mock.received(),
            vec![
                Received::Create { draft: 50 },
                Received::GetMany { ids: vec![1, 2] },
            ]
        );
    }

    #[tokio::test]
    async fn test_unexpected_request_is_recorded_and_dropped() {
        let mock = MockClient::<Account>::new();
        let client = mock.client();

        let result = client.apply(vec![(1, 10)]).await;
        assert!(matches!(result, Err(StoreError::ActorDropped)));
        assert_eq!(
            mock.received(),
            vec![Received::Apply {
                changes: vec![(1, 10)]
            }]
        );
    }

    #[tokio::test]
    async fn test_injected_error_reaches_caller() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_get(7).return_err(StoreError::ActorClosed);

        let result = mock.client().get(7).await;
        assert!(matches!(result, Err(StoreError::ActorClosed)));
        mock.verify();
    }
}
