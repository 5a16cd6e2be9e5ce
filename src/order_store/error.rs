//! Error types for the order history store.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An order needs at least one line.
    #[error("Cannot place an order without items")]
    EmptyOrder,

    /// A submission is already awaiting the gateway.
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// A submission outcome arrived while no submission was pending.
    #[error("No submission is in progress")]
    NoSubmissionInFlight,

    /// The gateway rejected or could not take the order.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),

    /// The store answered with a result that does not match the action sent.
    #[error("Unexpected store result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::StoreCommunicationError(msg)
    }
}
