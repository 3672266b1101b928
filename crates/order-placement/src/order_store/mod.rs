//! # Order Store
//!
//! Persisted orders, run as a [`StoreActor`]. Ids are assigned by the store
//! (`order_1`, `order_2`, ...).

pub mod record;

use crate::clients::OrderClient;
use crate::model::Order;
use store_actor::StoreActor;

/// Creates a new Order store actor and its client.
pub fn new(capacity: usize) -> (StoreActor<Order>, OrderClient) {
    let (actor, inner) = StoreActor::new(capacity);
    (actor, OrderClient::new(inner))
}
