//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// A feature's state is typically a closed enum of mutually exclusive
/// cases (e.g. `Loading` / `Success { .. }` / `Error { .. }`); exactly
/// one case is current at any instant. `Default` supplies the value
/// left behind when a reducer takes ownership of the current state.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
