//! State observation endpoint.

use tokio::sync::watch;

use crate::state::UiState;

/// Subscriber handle over a store's state cell.
///
/// Yields newly published states in publish order. A subscriber that
/// falls behind observes the latest state rather than every
/// intermediate one; values are never reordered.
pub struct StateStream<S: UiState> {
    receiver: watch::Receiver<S>,
}

impl<S: UiState> StateStream<S> {
    pub(crate) fn new(receiver: watch::Receiver<S>) -> Self {
        Self { receiver }
    }

    /// The latest published state.
    pub fn current(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Wait for a publish this subscriber has not yet observed and
    /// return the state it produced.
    ///
    /// Returns `None` once every handle of the owning store is gone.
    pub async fn changed(&mut self) -> Option<S> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
