//! # Mock Stores & Testing Guide
//!
//! `MockStore<S>` hands out a real `StoreClient<S>` whose requests are answered from a queue of
//! expectations instead of a reducer. It lets you test the logic *around* a client (for example
//! an orchestration that dispatches to two stores) without spawning any store actors.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real reducer |
//! | **Use Case** | Unit testing logic *around* the client | Testing the reducer or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a state that makes the reducer fail |
//!
//! ## Example
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::{FrameworkError, StoreState};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Flag { on: bool }
//! #[derive(Debug)] enum FlagAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("flag error")] struct FlagError;
//!
//! impl StoreState for Flag {
//!     type Action = FlagAction;
//!     type ActionResult = bool;
//!     type Error = FlagError;
//!     fn reduce(&mut self, _: FlagAction) -> Result<bool, FlagError> {
//!         self.on = !self.on;
//!         Ok(self.on)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Flag>::new();
//!     mock.expect_dispatch().return_ok(true);
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.dispatch(FlagAction::Toggle).await.unwrap());
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//!     assert_eq!(mock.take_dispatched().len(), 1);
//! }
//! ```
//!
//! ## Raw Helpers
//!
//! [`create_mock_client`] returns a client plus the receiving end of its channel. Combined with
//! [`expect_dispatch`] and [`expect_snapshot`] a test can hold a request, look at it, and decide
//! *when* to answer, which is how in-flight states are tested.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response for it.
enum Expectation<S: StoreState> {
    Dispatch {
        response: Result<S::ActionResult, FrameworkError>,
    },
    Snapshot {
        response: Result<S, FrameworkError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are answered in the order they were registered. A request that does not match
/// the next expectation panics the background task, and the client then sees
/// [`FrameworkError::ActorDropped`].
pub struct MockStore<S: StoreState> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    dispatched: Arc<Mutex<Vec<S::Action>>>,
    _publisher: watch::Sender<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StoreState> MockStore<S> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, updates) = watch::channel(S::default());
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, updates),
            expectations,
            dispatched,
            _publisher: publisher,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<S> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, oldest first.
    pub fn take_dispatched(&self) -> Vec<S::Action> {
        std::mem::take(&mut *self.dispatched.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<S: StoreState> {
    expectations: Expectations<S>,
}

impl<S: StoreState> DispatchExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Dispatch { response: Ok(result) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Dispatch { response: Err(error) });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: StoreState> {
    expectations: Expectations<S>,
}

impl<S: StoreState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return the given state.
    pub fn return_ok(self, state: S) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(state) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Err(error) });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The returned client's `subscribe()` only ever yields `S::default()`.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, updates) = watch::channel(S::default());
    (StoreClient::new(sender, updates), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Notes {
        lines: Vec<String>,
    }

    #[derive(Debug, PartialEq)]
    enum NotesAction {
        Append(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Notes error")]
    struct NotesError;

    impl StoreState for Notes {
        type Action = NotesAction;
        type ActionResult = usize;
        type Error = NotesError;

        fn reduce(&mut self, action: NotesAction) -> Result<usize, NotesError> {
            match action {
                NotesAction::Append(line) => self.lines.push(line),
            }
            Ok(self.lines.len())
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Notes>(10);

        let dispatch_task = tokio::spawn(async move {
            client
                .dispatch(NotesAction::Append("first".to_string()))
                .await
        });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(action, NotesAction::Append("first".to_string()));
        responder.send(Ok(1)).unwrap();

        let result = dispatch_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Notes>::new();

        mock.expect_dispatch().return_ok(1);
        mock.expect_snapshot().return_ok(Notes {
            lines: vec!["hello".to_string()],
        });

        let client = mock.client();

        let len = client
            .dispatch(NotesAction::Append("hello".to_string()))
            .await
            .unwrap();
        assert_eq!(len, 1);

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.lines, vec!["hello".to_string()]);

        mock.verify();
        assert_eq!(
            mock.take_dispatched(),
            vec![NotesAction::Append("hello".to_string())]
        );
        assert!(mock.take_dispatched().is_empty());
    }

    #[tokio::test]
    async fn test_mock_store_error_injection() {
        let mut mock = MockStore::<Notes>::new();
        mock.expect_dispatch()
            .return_err(FrameworkError::StoreError(Box::new(NotesError)));

        let result = mock
            .client()
            .dispatch(NotesAction::Append("x".to_string()))
            .await;
        assert!(matches!(result, Err(FrameworkError::StoreError(_))));
        mock.verify();
    }
}
