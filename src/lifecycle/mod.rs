//! # System Lifecycle & Orchestration
//!
//! Starts the stores, wires them together, runs checkout and shuts everything down.
//!
//! ## Wiring
//!
//! The two stores do not know about each other. [`OrderingSystem`] spawns one actor per store,
//! wraps the raw clients in [`CartClient`](crate::clients::CartClient) and
//! [`OrderClient`](crate::clients::OrderClient), and hands the order client its
//! [`OrderGateway`](crate::gateway::OrderGateway). Tests swap the gateway through
//! [`OrderingSystem::with_gateway`].
//!
//! ## Checkout
//!
//! [`submit_order_and_clear_cart`] is the only place both stores are touched together:
//!
//! 1. An empty cart is skipped without touching either store.
//! 2. Otherwise the order client submits; the order store shows `Submitting` meanwhile.
//! 3. On success the cart is cleared. On failure it is left alone and the error is logged.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for both store tasks to finish
//!
//! ## Observability
//!
//! Call [`setup_tracing`](store_framework::tracing::setup_tracing) once at startup, then pick
//! the verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Every request and state transition
//! ```

pub mod checkout;
pub mod config;
pub mod ordering_system;

pub use checkout::*;
pub use config::*;
pub use ordering_system::*;
