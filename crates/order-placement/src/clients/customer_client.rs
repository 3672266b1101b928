//! # Customer Client
//!
//! Wraps a `StoreClient<Customer>` and serves as the [`CustomerDirectory`].
use crate::clients::repository_error;
use crate::customer_store::record::validate;
use crate::model::{Customer, CustomerDraft, CustomerId};
use crate::ports::{CustomerDirectory, RepositoryError};
use async_trait::async_trait;
use store_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Customer store.
#[derive(Clone)]
pub struct CustomerClient {
    inner: StoreClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: StoreClient<Customer>) -> Self {
        Self { inner }
    }

    /// Registers a customer under a store-assigned id.
    #[instrument(skip(self))]
    pub async fn register(&self, draft: CustomerDraft) -> Result<Customer, RepositoryError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(repository_error)
    }

    /// Stores a customer under its own id.
    #[instrument(skip(self))]
    pub async fn add_customer(&self, customer: Customer) -> Result<(), RepositoryError> {
        validate(&customer).map_err(|e| RepositoryError::Other(Box::new(e)))?;
        self.inner.insert(customer).await.map_err(repository_error)
    }
}

impl RecordClient<Customer> for CustomerClient {
    type Error = RepositoryError;

    fn inner(&self) -> &StoreClient<Customer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        repository_error(e)
    }
}

#[async_trait]
impl CustomerDirectory for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        self.find(id.clone()).await
    }
}
