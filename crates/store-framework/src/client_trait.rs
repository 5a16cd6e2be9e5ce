//! # StoreHandle Trait
//!
//! Provides a common interface for store-specific clients, adding default `snapshot` and
//! `subscribe` methods built on top of a generic `StoreClient`.
use crate::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{FrameworkError, StoreClient, StoreHandle, StoreState};
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { hits: u32 }
/// #[derive(Debug)] enum TallyAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("tally error: {0}")] struct TallyError(String);
///
/// impl From<String> for TallyError {
///     fn from(s: String) -> Self { TallyError(s) }
/// }
///
/// impl StoreState for Tally {
///     type Action = TallyAction;
///     type ActionResult = u32;
///     type Error = TallyError;
///     fn reduce(&mut self, _: TallyAction) -> Result<u32, TallyError> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// struct TallyClient { inner: StoreClient<Tally> }
///
/// impl StoreHandle<Tally> for TallyClient {
///     type Error = TallyError;
///     fn inner(&self) -> &StoreClient<Tally> { &self.inner }
///     fn map_error(e: FrameworkError) -> TallyError { TallyError(e.to_string()) }
/// }
///
/// async fn usage(client: TallyClient) {
///     // snapshot() and subscribe() are provided automatically
///     let _ = client.snapshot().await;
///     let _ = client.subscribe();
/// }
/// ```
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Watch committed states.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
