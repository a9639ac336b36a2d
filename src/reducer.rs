//! Reducer trait for MVI architecture.

use crate::intent::Intent;
use crate::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. Calling it
/// twice with identical inputs yields structurally equal outputs.
///
/// Transitions are total: an intent that does not apply to the current
/// state returns the state unchanged rather than signaling an error.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
