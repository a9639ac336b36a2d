//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
///
/// Intent values are immutable and carry only the data needed to
/// process that one action (e.g. an identifier). They are processed by
/// reducers and state holders to produce new states.
pub trait Intent: Send + 'static {}
