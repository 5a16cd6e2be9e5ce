//! # Order Gateway
//!
//! The capability that actually delivers an order somewhere. The order client only knows the
//! [`OrderGateway`] trait; which implementation it talks to is decided when the system is wired.
//!
//! [`SimulatedGateway`] stands in for a backend: it waits for a fixed latency and then
//! accepts (or, when built with [`SimulatedGateway::failing`], rejects) every order.

use crate::model::CartLine;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Latency of the simulated backend.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The backend refused the order.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached.
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Delivers `lines` as one order.
    async fn submit(&self, lines: &[CartLine]) -> Result<(), GatewayError>;
}

/// A backend stand-in with a fixed latency.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedGateway {
    /// Accepts every order after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Rejects every order with `reason` after `delay`.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(reason.into()),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl OrderGateway for SimulatedGateway {
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn submit(&self, lines: &[CartLine]) -> Result<(), GatewayError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating backend latency");
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(reason) => Err(GatewayError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}
