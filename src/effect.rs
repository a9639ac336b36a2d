//! Base trait for one-shot effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects represent fire-and-forget signals the view reacts to once
/// rather than rendering from state:
/// - Navigation events
/// - Transient notifications (toasts, snackbars)
///
/// An effect is delivered at most once and is never replayed; it is not
/// part of the restorable UI state.
pub trait UiEffect: Send + 'static {}
