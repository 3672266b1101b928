use super::error::PlacementError;
use crate::config::{DuplicateLinePolicy, PlacementConfig, StockCommit};
use crate::model::{NewOrder, Order, OrderLineItem, OrderRequest, Product, ProductId, RequestedProduct};
use crate::ports::{CustomerDirectory, OrderStore, ProductCatalog};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// Validates and places orders against three collaborators.
///
/// The workflow keeps no state between calls. Two identical requests place two
/// orders and take stock twice.
///
/// ```rust
/// use order_placement::lifecycle::OrderSystem;
/// use order_placement::model::{Customer, OrderRequest, Product, RequestedProduct};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new();
///     system.customer_client.add_customer(Customer::new("c1", "Alice", "alice@example.com")).await?;
///     system.product_client.add_product(Product::new("p1", "Widget", 10.0, 5)).await?;
///
///     let order = system
///         .workflow
///         .place(OrderRequest::new("c1", vec![RequestedProduct::new("p1", 2)]))
///         .await?;
///     assert_eq!(order.products[0].price, 10.0);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderPlacementWorkflow<C, P, O> {
    customers: C,
    catalog: P,
    orders: O,
    config: PlacementConfig,
}

impl<C, P, O> OrderPlacementWorkflow<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    /// Creates a workflow with the default [`PlacementConfig`].
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self::with_config(customers, catalog, orders, PlacementConfig::default())
    }

    pub fn with_config(customers: C, catalog: P, orders: O, config: PlacementConfig) -> Self {
        Self {
            customers,
            catalog,
            orders,
            config,
        }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Places an order.
    ///
    /// # Errors
    /// - [`PlacementError::EmptyOrder`], [`PlacementError::InvalidQuantity`] and
    ///   [`PlacementError::DuplicateProduct`] before any collaborator is called
    /// - [`PlacementError::CustomerNotFound`] before the catalog is called
    /// - [`PlacementError::ProductNotFound`] and
    ///   [`PlacementError::InsufficientStock`] before anything is written
    /// - [`PlacementError::Repository`] when a collaborator fails
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, lines = request.products.len()))]
    pub async fn place(&self, request: OrderRequest) -> Result<Order, PlacementError> {
        debug!(?request, "place called");
        let OrderRequest {
            customer_id,
            products,
        } = request;

        let lines = normalize_lines(products, self.config.duplicate_lines).inspect_err(|e| {
            warn!(error = %e, "Rejected request");
        })?;

        let Some(customer) = self.customers.find_by_id(&customer_id).await? else {
            warn!("Customer not found");
            return Err(PlacementError::CustomerNotFound(customer_id));
        };

        let ids: Vec<ProductId> = lines.iter().map(|line| line.id.clone()).collect();
        let found = self.catalog.find_all_by_id(&ids).await?;
        if found.len() != ids.len() {
            let missing: Vec<ProductId> = ids
                .iter()
                .filter(|id| !found.iter().any(|product| &product.id == *id))
                .cloned()
                .collect();
            warn!(?missing, requested = ids.len(), found = found.len(), "Products not found");
            return Err(PlacementError::ProductNotFound { missing });
        }

        let items = price_lines(&found, &lines).inspect_err(|e| {
            warn!(error = %e, "Rejected request");
        })?;
        let draft = NewOrder {
            customer,
            products: items,
        };

        let order = match self.config.stock_commit {
            StockCommit::BeforePersist => {
                self.catalog.update_quantity(&lines).await?;
                self.orders.create(draft).await.inspect_err(|e| {
                    error!(error = %e, ?lines, "Stock decremented but order was not stored");
                })?
            }
            StockCommit::AfterPersist => {
                let order = self.orders.create(draft).await?;
                self.catalog
                    .update_quantity(&lines)
                    .await
                    .inspect_err(|e| {
                        error!(order_id = %order.id, error = %e, "Order stored but stock was not decremented");
                    })?;
                order
            }
        };

        info!(order_id = %order.id, items = order.products.len(), total = order.total(), "Order placed");
        Ok(order)
    }
}

/// Checks the request lines and applies the duplicate policy.
///
/// The returned lines name each product once, in order of first appearance.
pub fn normalize_lines(
    products: Vec<RequestedProduct>,
    policy: DuplicateLinePolicy,
) -> Result<Vec<RequestedProduct>, PlacementError> {
    if products.is_empty() {
        return Err(PlacementError::EmptyOrder);
    }

    let mut lines: Vec<RequestedProduct> = Vec::with_capacity(products.len());
    let mut positions: HashMap<ProductId, usize> = HashMap::new();

    for line in products {
        if line.quantity == 0 {
            return Err(PlacementError::InvalidQuantity(line.id));
        }
        match positions.get(&line.id) {
            None => {
                positions.insert(line.id.clone(), lines.len());
                lines.push(line);
            }
            Some(_) if policy == DuplicateLinePolicy::Reject => {
                return Err(PlacementError::DuplicateProduct(line.id));
            }
            Some(&index) => {
                let merged = &mut lines[index];
                merged.quantity = merged
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or(PlacementError::InvalidQuantity(line.id))?;
            }
        }
    }

    Ok(lines)
}

/// Prices one line item per resolved product, in catalog order.
pub fn price_lines(
    found: &[Product],
    lines: &[RequestedProduct],
) -> Result<Vec<OrderLineItem>, PlacementError> {
    found
        .iter()
        .map(|product| {
            let line = lines
                .iter()
                .find(|line| line.id == product.id)
                .ok_or_else(|| PlacementError::ProductNotFound {
                    missing: vec![product.id.clone()],
                })?;

            if product.quantity < line.quantity {
                return Err(PlacementError::InsufficientStock {
                    product_id: product.id.clone(),
                    requested: line.quantity,
                    available: product.quantity,
                });
            }

            Ok(OrderLineItem {
                product_id: product.id.clone(),
                quantity: line.quantity,
                price: product.price,
            })
        })
        .collect()
}
