//! # Order Placement Demo
//!
//! Starts an [`OrderSystem`] configured from the environment, seeds one customer
//! and two products, then places one order that fits the stock and one that
//! does not.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_DUPLICATE_LINES=merge RUST_LOG=debug cargo run
//! ```

use order_placement::config::SystemConfig;
use order_placement::lifecycle::{setup_tracing, OrderSystem};
use order_placement::model::{Customer, OrderRequest, Product, ProductId, RequestedProduct};
use std::error::Error;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    let system = OrderSystem::with_config(config);

    let span = tracing::info_span!("seeding");
    async {
        system
            .customer_client
            .add_customer(Customer::new("c1", "Alice", "alice@example.com"))
            .await?;
        system
            .product_client
            .add_product(Product::new("p1", "Widget", 10.0, 5))
            .await?;
        system
            .product_client
            .add_product(Product::new("p2", "Gadget", 24.5, 3))
            .await?;
        info!("Seeded 1 customer and 2 products");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let requests = [
        OrderRequest::new(
            "c1",
            vec![RequestedProduct::new("p1", 2), RequestedProduct::new("p2", 1)],
        ),
        OrderRequest::new("c1", vec![RequestedProduct::new("p1", 10)]),
    ];

    for request in requests {
        let span = tracing::info_span!("order_processing");
        match system.workflow.place(request).instrument(span).await {
            Ok(order) => info!(order_id = %order.id, total = order.total(), "Order processed successfully"),
            Err(e) => error!(error = %e, "Order processing failed"),
        }
    }

    for id in ["p1", "p2"] {
        let id = ProductId::from(id);
        let stock = system.product_client.check_stock(id.clone()).await?;
        info!(product_id = %id, ?stock, "Remaining stock");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
