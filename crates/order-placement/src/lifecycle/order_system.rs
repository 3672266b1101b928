use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::workflow::OrderPlacementWorkflow;
use crate::{customer_store, order_store, product_store};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The workflow type an [`OrderSystem`] runs.
pub type StoreWorkflow = OrderPlacementWorkflow<CustomerClient, ProductClient, OrderClient>;

/// Errors raised while stopping an [`OrderSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// Runs the customer, product and order stores and the workflow over them.
///
/// # Example
///
/// ```rust
/// use order_placement::lifecycle::OrderSystem;
/// use order_placement::model::{Product, ProductId};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new();
///     system.product_client.add_product(Product::new("p1", "Widget", 10.0, 5)).await?;
///     assert_eq!(system.product_client.check_stock(ProductId::from("p1")).await?, Some(5));
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Client for the customer store
    pub customer_client: CustomerClient,

    /// Client for the product store
    pub product_client: ProductClient,

    /// Client for the order store
    pub order_client: OrderClient,

    /// Places orders against the three stores
    pub workflow: StoreWorkflow,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`]. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Starts every store and wires the workflow with `config.placement`.
    pub fn with_config(config: SystemConfig) -> Self {
        info!(
            channel_capacity = config.channel_capacity,
            duplicate_lines = ?config.placement.duplicate_lines,
            stock_commit = %config.placement.stock_commit,
            "Starting order system"
        );

        // 1. Create the stores
        let (customer_actor, customer_client) = customer_store::new(config.channel_capacity);
        let (product_actor, product_client) = product_store::new(config.channel_capacity);
        let (order_actor, order_client) = order_store::new(config.channel_capacity);

        // 2. Start them
        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        // 3. Wire the workflow
        let workflow = OrderPlacementWorkflow::with_config(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
            config.placement,
        );

        Self {
            customer_client,
            product_client,
            order_client,
            workflow,
            handles,
        }
    }

    /// Drops every client and waits for the stores to stop.
    ///
    /// # Errors
    /// [`SystemError::TaskFailed`] if a store task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Closing every sender ends each store's request loop
        drop(self.workflow);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
