//! Orders created by order placement.
//!
//! [`Order`] implements [`Record`](store_actor::Record) (see
//! [`order_store`](crate::order_store)) with [`NewOrder`] as its creation
//! payload. Orders are never changed once stored.
use crate::model::{Customer, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
}

/// One product/quantity/price record within an order.
///
/// `price` is the unit price read from the catalog when the order was placed,
/// not a live reference to the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

impl OrderLineItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// A stored customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub products: Vec<OrderLineItem>,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Order instance with status `Created`.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the order store)
    /// * `customer` - Customer placing the order
    /// * `products` - Priced line items
    pub fn new(id: OrderId, customer: Customer, products: Vec<OrderLineItem>) -> Self {
        Self {
            id,
            customer,
            products,
            status: OrderStatus::Created,
        }
    }

    /// Sum of `quantity * price` over all line items.
    pub fn total(&self) -> f64 {
        self.products.iter().map(OrderLineItem::subtotal).sum()
    }
}

/// Payload handed to the order store to persist a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub products: Vec<OrderLineItem>,
}
