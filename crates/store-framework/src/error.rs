//! # Framework Errors
//!
//! Common error types used by every store and client.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    /// The reducer rejected the action. Holds the store's own error type, boxed.
    #[error("Store error: {0}")]
    StoreError(Box<dyn std::error::Error + Send + Sync>),
}
