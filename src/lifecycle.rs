//! Active/Destroyed lifecycle tracking for state holders.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Lifecycle phase of a state holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting dispatches, publishing states, delivering effects.
    Active,
    /// Torn down: dispatches are no-ops and the effect queue is closed.
    Destroyed,
}

/// Shared Active→Destroyed flag with async waiters.
///
/// The transition is triggered once by the owning scope's teardown and
/// is irreversible.
#[derive(Clone)]
pub struct Lifecycle {
    destroyed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            destroyed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Transition to Destroyed and wake all waiters.
    ///
    /// Returns true for the call that performed the transition; later
    /// calls are no-ops returning false.
    pub fn destroy(&self) -> bool {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_destroyed() {
            Phase::Destroyed
        } else {
            Phase::Active
        }
    }

    /// Wait until the lifecycle reaches Destroyed.
    pub async fn destroyed(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, destroy() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the wakeup.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_destroyed() {
            return;
        }
        notified.await;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
