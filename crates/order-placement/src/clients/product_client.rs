//! # Product Client
//!
//! Wraps a `StoreClient<Product>` and serves as the [`ProductCatalog`].
use crate::clients::repository_error;
use crate::model::{Product, ProductDraft, ProductId, RequestedProduct};
use crate::ports::{ProductCatalog, RepositoryError};
use crate::product_store::record::validate;
use crate::product_store::{ProductError, StockChange};
use async_trait::async_trait;
use store_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Stores a product under its own id.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product: Product) -> Result<(), RepositoryError> {
        debug!("Sending request");
        validate(&product).map_err(product_error)?;
        self.inner.insert(product).await.map_err(Self::map_error)
    }

    /// Adds a product under a store-assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Returns the available stock, or `None` for an unknown product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<Option<u32>, RepositoryError> {
        debug!("Checking stock for product {}", id);
        Ok(self.find(id).await?.map(|product| product.quantity))
    }

    /// Puts `amount` units of a product back into stock.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, amount: u32) -> Result<Product, RepositoryError> {
        debug!("Restocking {} units of product {}", amount, id);
        let mut updated = self
            .inner
            .apply(vec![(id.clone(), StockChange::Restock(amount))])
            .await
            .map_err(Self::map_error)?;
        updated
            .pop()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}

/// Keeps stock refusals recognisable to callers of the catalog.
fn product_error(e: ProductError) -> RepositoryError {
    match e {
        ProductError::InsufficientStock {
            product_id,
            requested,
            available,
        } => RepositoryError::InsufficientStock {
            product_id,
            requested,
            available,
        },
        other => RepositoryError::Other(Box::new(other)),
    }
}

impl RecordClient<Product> for ProductClient {
    type Error = RepositoryError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::Record(inner) => match inner.downcast::<ProductError>() {
                Ok(product) => product_error(*product),
                Err(inner) => RepositoryError::Other(inner),
            },
            other => repository_error(other),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        self.find_many(ids.to_vec()).await
    }

    /// Sends every decrement as one batch, so either all products are
    /// decremented or none are.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    async fn update_quantity(&self, items: &[RequestedProduct]) -> Result<(), RepositoryError> {
        debug!(?items, "update_quantity called");
        let changes = items
            .iter()
            .map(|item| (item.id.clone(), StockChange::Decrement(item.quantity)))
            .collect();
        self.inner.apply(changes).await.map_err(Self::map_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::{MockClient, Received};

    #[tokio::test]
    async fn test_update_quantity_sends_one_decrement_batch() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_apply().return_ok(vec![
            Product::new("p1", "Widget", 10.0, 3),
            Product::new("p2", "Gadget", 4.0, 0),
        ]);
        let client = ProductClient::new(mock.client());

        client
            .update_quantity(&[RequestedProduct::new("p1", 2), RequestedProduct::new("p2", 1)])
            .await
            .unwrap();

        mock.verify();
        assert_eq!(
            mock.received(),
            vec![Received::Apply {
                changes: vec![
                    (ProductId::from("p1"), StockChange::Decrement(2)),
                    (ProductId::from("p2"), StockChange::Decrement(1)),
                ]
            }]
        );
    }

    #[tokio::test]
    async fn test_refused_decrement_maps_to_insufficient_stock() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_apply()
            .return_err(StoreError::Record(Box::new(ProductError::InsufficientStock {
                product_id: ProductId::from("p1"),
                requested: 10,
                available: 5,
            })));
        let client = ProductClient::new(mock.client());

        let result = client
            .update_quantity(&[RequestedProduct::new("p1", 10)])
            .await;

        match result {
            Err(RepositoryError::InsufficientStock {
                product_id,
                requested,
                available,
            }) => {
                assert_eq!(product_id, ProductId::from("p1"));
                assert_eq!((requested, available), (10, 5));
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_stock_returns_level_or_none() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId::from("p1"))
            .return_ok(Some(Product::new("p1", "Widget", 10.0, 42)));
        mock.expect_get(ProductId::from("p9")).return_ok(None);
        let client = ProductClient::new(mock.client());

        assert_eq!(client.check_stock("p1".into()).await.unwrap(), Some(42));
        assert_eq!(client.check_stock("p9".into()).await.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get_many().return_err(StoreError::ActorClosed);
        let client = ProductClient::new(mock.client());

        let result = client.find_all_by_id(&[ProductId::from("p1")]).await;
        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_invalid_product_is_not_sent() {
        let mock = MockClient::<Product>::new();
        let client = ProductClient::new(mock.client());

        let result = client
            .add_product(Product::new("p1", "Widget", -1.0, 1))
            .await;

        assert!(matches!(result, Err(RepositoryError::Other(_))));
        assert!(mock.received().is_empty());
    }
}
