//! Base trait for UI state in MVI architecture.

/// Marker trait for state snapshots.
///
/// States are cheap to clone and compare, and `Default` is the value a
/// freshly mounted container starts from.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {
    /// True when `other` is the very same snapshot, not merely equal.
    ///
    /// Containers use this to skip notifying subscribers after a no-op
    /// transition.
    fn is_same(&self, other: &Self) -> bool;
}
