//! # Order Client
//!
//! Provides a high-level API for the order history store and drives submissions: it moves the
//! store into `Submitting`, awaits the [`OrderGateway`] outside the store loop, then records
//! the outcome.
use crate::gateway::OrderGateway;
use crate::model::{CartLine, Order, OrderId, OrderStatus};
use crate::order_store::{OrderAction, OrderActionResult, OrderError, OrderHistory};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use store_framework::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, info, instrument, warn, Instrument};

/// Client for interacting with the order history store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<OrderHistory>,
    gateway: Arc<dyn OrderGateway>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<OrderHistory>, gateway: Arc<dyn OrderGateway>) -> Self {
        Self { inner, gateway }
    }

    async fn dispatch(&self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }

    async fn dispatch_for_order(&self, action: OrderAction) -> Result<Order, OrderError> {
        match self.dispatch(action).await? {
            OrderActionResult::Added(order) => Ok(order),
            other => Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    async fn dispatch_for_status(&self, action: OrderAction) -> Result<OrderStatus, OrderError> {
        match self.dispatch(action).await? {
            OrderActionResult::StatusChanged(status) => Ok(status),
            other => Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        }
    }
}

#[async_trait]
impl StoreHandle<OrderHistory> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<OrderHistory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StoreError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::StoreCommunicationError(other.to_string()),
            },
            other => OrderError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Records `lines` as an order right away, bypassing the gateway.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn add_order(&self, lines: Vec<CartLine>) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.dispatch_for_order(OrderAction::AddOrder(lines)).await
    }

    /// Forgets all orders. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn clear_history(&self) -> Result<usize, OrderError> {
        debug!("Sending request");
        match self.dispatch(OrderAction::ClearHistory).await? {
            OrderActionResult::Cleared { removed } => Ok(removed),
            other => Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Submits `lines` through the gateway and records the order on success.
    ///
    /// Status goes `Submitting` for the duration of the gateway call, then `Idle` with the new
    /// order appended, or `Failed` with the history untouched. Empty `lines` are refused before
    /// any status change.
    ///
    /// The submission runs on its own task, so dropping this future (a timeout, a `select!`)
    /// does not strand the store in `Submitting`: the outcome is still recorded.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn submit_order(&self, lines: Vec<CartLine>) -> Result<Order, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let client = self.clone();
        tokio::spawn(async move { client.run_submission(lines).await }.in_current_span())
            .await
            .map_err(|e| OrderError::SubmissionFailed(format!("Submission task failed: {}", e)))?
    }

    async fn run_submission(&self, lines: Vec<CartLine>) -> Result<Order, OrderError> {
        self.dispatch_for_status(OrderAction::SubmitPending).await?;
        debug!("Submission pending");

        match self.gateway.submit(&lines).await {
            Ok(()) => {
                let order = self
                    .dispatch_for_order(OrderAction::SubmitFulfilled(lines))
                    .await?;
                info!(order_id = %order.id, total = %order.total, "Order submitted");
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "Gateway refused order");
                self.dispatch_for_status(OrderAction::SubmitRejected(e.to_string()))
                    .await?;
                Err(OrderError::SubmissionFailed(e.to_string()))
            }
        }
    }

    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.snapshot().await?.orders().to_vec())
    }

    pub async fn orders_count(&self) -> Result<usize, OrderError> {
        Ok(self.snapshot().await?.orders_count())
    }

    pub async fn total_spent(&self) -> Result<Decimal, OrderError> {
        Ok(self.snapshot().await?.total_spent())
    }

    pub async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.snapshot().await?.find_by_id(id).cloned())
    }

    pub async fn status(&self) -> Result<OrderStatus, OrderError> {
        Ok(self.snapshot().await?.status())
    }
}
