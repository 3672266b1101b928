use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(format!("customer_{}", id))
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer who can place orders.
///
/// # Store
/// Implements [`Record`](store_actor::Record) (see
/// [`customer_store`](crate::customer_store)). Order placement only checks that
/// the customer exists; the record is copied into the stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name
    /// * `email` - Contact address
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for registering a customer under a store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
}
