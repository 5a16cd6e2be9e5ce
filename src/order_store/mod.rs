//! # Order History Store
//!
//! Keeps the orders placed during the session and the status of the current submission.
//!
//! ## Structure
//!
//! - [`state`] - [`OrderHistory`], its reducer and the selectors
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Submission
//!
//! The store itself never awaits anything. [`OrderClient::submit_order`](crate::clients::OrderClient::submit_order)
//! drives a submission from the outside:
//!
//! ```text
//! dispatch(SubmitPending)            status: Idle | Failed -> Submitting
//! gateway.submit(lines).await        status stays Submitting, visible to subscribers
//! dispatch(SubmitFulfilled(lines))   order appended, status -> Idle
//!   or dispatch(SubmitRejected(..))  status -> Failed
//! ```
//!
//! A second `SubmitPending` while `Submitting` is rejected, so two submissions never overlap.

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use store_framework::{StoreActor, StoreClient};

/// Creates a new order history store actor with no orders, plus its client.
pub fn new(buffer_size: usize) -> (StoreActor<OrderHistory>, StoreClient<OrderHistory>) {
    StoreActor::new(buffer_size)
}
