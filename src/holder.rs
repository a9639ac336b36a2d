//! The state-holder abstraction tying intents to states and effects.

use crate::effect::UiEffect;
use crate::intent::Intent;
use crate::state::UiState;
use crate::store::{StateStream, Store};

/// A feature's state holder: owner of its [`Store`] and the entry point
/// for intents.
///
/// Implementors provide [`dispatch`](StateHolder::dispatch). A typical
/// implementation applies a [`Reducer`](crate::Reducer) synchronously
/// through [`Store::reduce`] for immediate transitions (e.g. optimistic
/// updates), then pushes asynchronous business work onto the store's
/// task scope with [`Store::spawn`], publishing states and emitting
/// effects from there based on the outcome.
///
/// # Concurrency
///
/// `dispatch` calls are not serialized here or in [`Store`]. Logic that
/// reads state, awaits a business operation, and writes state back
/// races concurrent dispatches; a feature that needs sequencing must
/// add its own (for example an intent queue drained by a single task).
///
/// # Failures
///
/// Business failures never escape `dispatch`: translate them into an
/// error state variant or a notification effect.
pub trait StateHolder {
    type State: UiState;
    type Intent: Intent;
    type Effect: UiEffect;

    /// The store backing this holder.
    fn store(&self) -> &Store<Self::State, Self::Effect>;

    /// Process one intent.
    ///
    /// Returns immediately; long-running work belongs on the store's
    /// task scope. Once the holder is destroyed the store turns every
    /// publish, emit, and spawn into a no-op, so dispatching after
    /// destroy is safe and changes nothing.
    fn dispatch(&self, intent: Self::Intent);

    /// The latest published state.
    fn state(&self) -> Self::State {
        self.store().state()
    }

    /// Subscribe to state publications.
    fn subscribe(&self) -> StateStream<Self::State> {
        self.store().subscribe()
    }

    /// Tear down the backing store; in-flight work is canceled and the
    /// effect stream ends.
    fn destroy(&self) {
        self.store().destroy();
    }
}
