//! # Order Client
//!
//! Wraps a `StoreClient<Order>` and serves as the [`OrderStore`].
use crate::clients::repository_error;
use crate::model::{NewOrder, Order};
use crate::ports::{OrderStore, RepositoryError};
use async_trait::async_trait;
use store_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }
}

impl RecordClient<Order> for OrderClient {
    type Error = RepositoryError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        repository_error(e)
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer.id, items = order.products.len()))]
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        debug!(?order, "create called");
        let stored = self.inner.create(order).await.map_err(repository_error)?;
        info!(order_id = %stored.id, "Order stored");
        Ok(stored)
    }
}
