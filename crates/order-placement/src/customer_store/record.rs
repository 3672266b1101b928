//! [`Record`] implementation for [`Customer`].
//!
//! Customers are immutable once stored, so the change type is uninhabited.

use super::error::CustomerError;
use crate::model::{Customer, CustomerDraft, CustomerId};
use std::convert::Infallible;
use store_actor::Record;

impl Record for Customer {
    type Id = CustomerId;
    type Draft = CustomerDraft;
    type Change = Infallible;
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_draft(id: CustomerId, draft: CustomerDraft) -> Result<Self, CustomerError> {
        let customer = Customer::new(id, draft.name, draft.email);
        validate(&customer)?;
        Ok(customer)
    }

    fn apply(&mut self, change: Infallible) -> Result<(), CustomerError> {
        match change {}
    }
}

/// Checks the fields every stored customer must have.
pub fn validate(customer: &Customer) -> Result<(), CustomerError> {
    if customer.name.trim().is_empty() {
        return Err(CustomerError::MissingName);
    }
    if !customer.email.contains('@') {
        return Err(CustomerError::InvalidEmail(customer.email.clone()));
    }
    Ok(())
}
