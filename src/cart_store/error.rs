//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A quantity that cannot be stored on a cart line.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The store answered with a result that does not match the action sent.
    #[error("Unexpected store result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreCommunicationError(msg)
    }
}
