//! # Store Framework
//!
//! This crate provides the building blocks for single-owner state containers in Rust.
//! A **store** owns exactly one state value, changes it only through typed actions,
//! and hands out snapshots to anyone who asks. Each store runs as an **actor**: a Tokio
//! task that processes requests one at a time.
//!
//! ## Why Reducers + Actor Model?
//!
//! ### Reducers
//!
//! - Every change to the state is a named action (`AddItem`, `ClearHistory`, ...)
//! - A reducer is a plain synchronous function from `(state, action)` to a new state
//! - Derived values (totals, counts) are computed from snapshots, never stored
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each store eliminates interleaved mutations
//!
//! Together, a store behaves like the event loop of an interactive application: every
//! action runs to completion before the next one is looked at, while slow work (network
//! calls, simulated delays) happens *outside* the store in the client that dispatches.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`StoreState`]) - Your business logic: the state and its reducer
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and change publication
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - Type-safe communication
//!
//! ```rust
//! use store_framework::{StoreActor, StoreState};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Add(i64),
//!     Reset,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter overflow")]
//! struct CounterError;
//!
//! impl StoreState for Counter {
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Error = CounterError;
//!
//!     fn reduce(&mut self, action: CounterAction) -> Result<i64, CounterError> {
//!         match action {
//!             CounterAction::Add(n) => self.value = self.value.checked_add(n).ok_or(CounterError)?,
//!             CounterAction::Reset => self.value = 0,
//!         }
//!         Ok(self.value)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Counter>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     assert_eq!(client.dispatch(CounterAction::Add(2)).await.unwrap(), 2);
//!     let snapshot = client.snapshot().await.unwrap();
//!     assert_eq!(snapshot.value, 2);
//! }
//! ```
//!
//! ## Atomic Actions
//!
//! The actor reduces every action against a copy of the current state and only commits the
//! copy when the reducer returns `Ok`. A reducer may therefore bail out halfway with `?`
//! without leaving a half-applied change behind.
//!
//! ## Observing Changes
//!
//! Every committed state is published on a `tokio::sync::watch` channel.
//! [`StoreClient::subscribe`] hands out a receiver that always holds the latest state, which
//! is how a UI re-renders when, for example, an order status flips to `Submitting`.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockStore` that answers requests from a queue of
//! expectations instead of running a reducer, so client logic can be tested in isolation.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use state::StoreState;
