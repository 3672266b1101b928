//! Error types for the Customer store.

use thiserror::Error;

/// Errors raised for invalid customer data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer name must not be empty")]
    MissingName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
