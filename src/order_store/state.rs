//! Order history state and its submission status machine.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{CartLine, Order, OrderId, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store_framework::StoreState;
use tracing::debug;

/// Every order placed in this session, oldest first, plus the submission status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    orders: Vec<Order>,
    status: OrderStatus,
}

impl OrderHistory {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_count(&self) -> usize {
        self.orders.len()
    }

    /// Sum of the totals of all recorded orders.
    pub fn total_spent(&self) -> Decimal {
        self.orders.iter().map(|order| order.total).sum()
    }

    pub fn find_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    fn append(&mut self, lines: Vec<CartLine>) -> Result<Order, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let order = Order::new(lines);
        debug!(order_id = %order.id, total = %order.total, "Recording order");
        self.orders.push(order.clone());
        Ok(order)
    }

    fn expect_submitting(&self) -> Result<(), OrderError> {
        match self.status {
            OrderStatus::Submitting => Ok(()),
            _ => Err(OrderError::NoSubmissionInFlight),
        }
    }
}

impl StoreState for OrderHistory {
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    fn reduce(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddOrder(lines) => self.append(lines).map(OrderActionResult::Added),
            OrderAction::SubmitPending => {
                if self.status == OrderStatus::Submitting {
                    return Err(OrderError::SubmissionInProgress);
                }
                self.status = OrderStatus::Submitting;
                Ok(OrderActionResult::StatusChanged(self.status))
            }
            OrderAction::SubmitFulfilled(lines) => {
                self.expect_submitting()?;
                let order = self.append(lines)?;
                self.status = OrderStatus::Idle;
                Ok(OrderActionResult::Added(order))
            }
            OrderAction::SubmitRejected(reason) => {
                self.expect_submitting()?;
                debug!(%reason, "Submission rejected");
                self.status = OrderStatus::Failed;
                Ok(OrderActionResult::StatusChanged(self.status))
            }
            OrderAction::ClearHistory => {
                let removed = self.orders.len();
                self.orders.clear();
                Ok(OrderActionResult::Cleared { removed })
            }
        }
    }
}
