//! Model-View-Intent (MVI) architecture primitives.
//!
//! This crate provides base contracts for implementing unidirectional
//! data flow in the UI layer, plus the state holder that ties them
//! together.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ StateHolder::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑              │                                          │
//!    │              └──→ Effect (one-shot) ──→ View            │
//!    └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Effect**: One-shot signals not rendered from state (navigation,
//!   transient notifications)
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Observable state cell plus bounded effect queue, scoped
//!   to the owning UI's lifetime
//!
//! # Example
//!
//! ```
//! use uniflow::{Store, UiEffect, UiState};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! enum CounterState {
//!     #[default]
//!     Zero,
//!     Counting(u32),
//! }
//! impl UiState for CounterState {}
//!
//! #[derive(Debug, Clone)]
//! struct Saved;
//! impl UiEffect for Saved {}
//!
//! let (store, _effects) = Store::<CounterState, Saved>::new(CounterState::Zero);
//! store.publish(CounterState::Counting(1));
//! assert_eq!(store.state(), CounterState::Counting(1));
//! ```

mod effect;
mod holder;
mod intent;
mod lifecycle;
mod reducer;
mod state;
mod store;

pub use effect::UiEffect;
pub use holder::StateHolder;
pub use intent::Intent;
pub use lifecycle::{Lifecycle, Phase};
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{
    EffectStream, EmitError, StateStream, Store, StoreBuilder, DEFAULT_EFFECT_CAPACITY,
};
