//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logging used by every store.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Store started` and `Shutdown`, with a `store` field naming the state type
//! - **Dispatches**: the action at `debug`, the result at `info`, rejections at `warn`
//! - **Client Calls**: client methods are `#[instrument]`ed, so their spans wrap the store logs
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every action payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store started store="CartState"
//! INFO Dispatch ok store="CartState" result=ItemAdded { quantity: 1 }
//! INFO checkout: Dispatch ok store="OrderHistory" result=StatusChanged(Submitting)
//! ```

/// Initializes the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`. The compact format shows spans inline
/// (e.g. `checkout:submit_order`) and hides module paths, since every store log already
/// carries a `store` field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
