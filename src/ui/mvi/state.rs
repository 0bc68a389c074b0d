//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states and compared to detect changes.
/// They carry everything needed to pick what to render, but not the rendered
/// content itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
