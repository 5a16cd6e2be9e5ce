//! Actions accepted by the order history store.
//!
//! A submission is split into three actions so the store never waits on I/O:
//! `SubmitPending` before the gateway call, then exactly one of `SubmitFulfilled`
//! or `SubmitRejected` once the gateway has answered.

use crate::model::{CartLine, Order, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Records an order directly, without going through a submission.
    AddOrder(Vec<CartLine>),
    /// Marks a submission as started.
    SubmitPending,
    /// Records the submitted lines as a new order and returns to idle.
    SubmitFulfilled(Vec<CartLine>),
    /// Marks the pending submission as failed. Carries the reason for the logs.
    SubmitRejected(String),
    /// Forgets every recorded order.
    ClearHistory,
}

/// Results from OrderActions
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The order that was appended to the history.
    Added(Order),
    /// How many orders were dropped.
    Cleared { removed: usize },
    /// The status after the transition.
    StatusChanged(OrderStatus),
}
