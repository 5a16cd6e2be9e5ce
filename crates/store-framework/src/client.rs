//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` provides a type-safe, async API for a `StoreActor<S>`. It forwards
/// requests over a Tokio mpsc channel and receives results via oneshot channels.
///
/// * **Cloneable** – holds only a sender and a watch receiver, so cloning is inexpensive.
/// * **Async API** – `dispatch` and `snapshot` resolve to `Result<…, FrameworkError>`.
/// * **Observable** – `subscribe` returns a receiver that always holds the latest state.
#[derive(Clone)]
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    updates: watch::Receiver<S>,
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, updates: watch::Receiver<S>) -> Self {
        Self { sender, updates }
    }

    pub async fn dispatch(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a receiver of committed states, starting at the most recent one.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.updates.clone()
    }
}
