//! [`Record`] implementation for [`Order`].
//!
//! The store does not validate orders; whatever the workflow composed is kept
//! as is. Orders cannot be changed after creation.

use crate::model::{NewOrder, Order, OrderId};
use std::convert::Infallible;
use store_actor::Record;

impl Record for Order {
    type Id = OrderId;
    type Draft = NewOrder;
    type Change = Infallible;
    type Error = Infallible;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_draft(id: OrderId, draft: NewOrder) -> Result<Self, Infallible> {
        Ok(Order::new(id, draft.customer, draft.products))
    }

    fn apply(&mut self, change: Infallible) -> Result<(), Infallible> {
        match change {}
    }
}
