//! The input of order placement.

use crate::model::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};

/// A product and the quantity wanted of it.
///
/// Also the payload of a stock decrement: the catalog takes `quantity` units of
/// product `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
    pub id: ProductId,
    pub quantity: u32,
}

impl RequestedProduct {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// A request to place an order.
///
/// Deserializes from the shape API callers send:
///
/// ```json
/// { "customer_id": "c1", "products": [{ "id": "p1", "quantity": 2 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<RequestedProduct>,
}

impl OrderRequest {
    pub fn new(customer_id: impl Into<CustomerId>, products: Vec<RequestedProduct>) -> Self {
        Self {
            customer_id: customer_id.into(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_api_shape() {
        let json = r#"{"customer_id":"c1","products":[{"id":"p1","quantity":2},{"id":"p2","quantity":1}]}"#;
        let request: OrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            request,
            OrderRequest::new(
                "c1",
                vec![RequestedProduct::new("p1", 2), RequestedProduct::new("p2", 1)]
            )
        );
    }

    #[test]
    fn test_negative_quantity_is_rejected_by_the_type() {
        let json = r#"{"customer_id":"c1","products":[{"id":"p1","quantity":-2}]}"#;
        assert!(serde_json::from_str::<OrderRequest>(json).is_err());
    }

    #[test]
    fn test_missing_products_field_is_rejected() {
        let json = r#"{"customer_id":"c1"}"#;
        assert!(serde_json::from_str::<OrderRequest>(json).is_err());
    }
}
