//! # StoreState Trait
//!
//! The `StoreState` trait defines the contract every state container (cart, order history, ...)
//! must implement to be managed by the generic `StoreActor`. It names the action type the store
//! accepts, what each action returns, and the error a rejected action produces.
//!
//! # Architecture Note
//! By defining one contract that all of our states satisfy, the `StoreActor` loop is written
//! *once* and reused for every store. Associated types keep the stores apart at compile time:
//! a `CartAction` can never be dispatched to the order history store.

use std::fmt::Debug;

/// Trait that any state value must implement to be owned by a [`StoreActor`](crate::StoreActor).
///
/// # Reducers are synchronous
/// `reduce` is not `async`. An action must run to completion before the next one
/// is processed, so anything that has to wait (a remote call, a timer) is done by the caller,
/// which then dispatches the outcome as another action.
///
/// # Errors
/// Returning `Err` rejects the action. The actor discards every change the reducer made before
/// failing, so implementations may use `?` freely.
pub trait StoreState: Clone + Default + Debug + Send + Sync + 'static {
    /// Enum of the operations this store accepts (e.g. `AddItem`, `ClearHistory`).
    type Action: Send + Sync + Debug;

    /// The value returned to the dispatcher for a successful action.
    type ActionResult: Send + Sync + Debug;

    /// The error type for rejected actions, one enum per store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply `action` to the state.
    fn reduce(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
