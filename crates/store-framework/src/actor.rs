//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the server half of a store. It owns the state,
//! processes requests sequentially and publishes every committed state to subscribers.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns one state value.
///
/// # Concurrency Model
/// Each `StoreActor` runs in its own Tokio task and handles one request at a time, so the
/// state needs no `Mutex` or `RwLock`. Exclusive ownership inside the task is the lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the `actor` (server) and a `client` (interface).
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: clone the client freely; dropping every clone stops the actor.
///
/// # Operations
///
/// * **Dispatch**:
///     1. Clones the current state.
///     2. Calls [`StoreState::reduce`] on the clone.
///     3. On `Ok`, commits the clone, publishes it to subscribers and replies with the result.
///     4. On `Err`, discards the clone and replies with [`FrameworkError::StoreError`].
///
/// * **Snapshot**: replies with a clone of the current state.
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a `StoreActor` holding `S::default()` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls on the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        Self::with_state(buffer_size, S::default())
    }

    /// Creates a `StoreActor` starting from `initial` instead of the default state.
    pub fn with_state(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, updates) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StoreClient::new(sender, updates);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        let store = store_name::<S>();
        info!(store, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(store, ?action, "Dispatch");
                    let mut next = self.state.clone();
                    match next.reduce(action) {
                        Ok(result) => {
                            self.state = next;
                            self.publisher.send_replace(self.state.clone());
                            info!(store, ?result, "Dispatch ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(store, error = %e, "Dispatch rejected");
                            let _ = respond_to.send(Err(FrameworkError::StoreError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(store, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(store, "Shutdown");
    }
}

/// Short type name used as the `store` log field (e.g. "CartState" instead of the full path).
fn store_name<S>() -> &'static str {
    std::any::type_name::<S>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
