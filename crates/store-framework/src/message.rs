//! # Generic Messages
//!
//! Message types passed between a [`StoreClient`](crate::StoreClient) and a
//! [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal request type sent to a store actor.
///
/// A store has only two kinds of traffic:
///
/// - **Dispatch**: run a [`StoreState::Action`] through the reducer and reply with its result.
/// - **Snapshot**: reply with a clone of the current state. Selectors run on the snapshot.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
