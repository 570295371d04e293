//! Pending-list configuration.

/// Configuration for a [`PendingHandle`](crate::PendingHandle).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingConfig {
    /// Capacity, in tuples, of a list created on demand by
    /// [`PendingHandle::add`](crate::PendingHandle::add).
    ///
    /// Default: 256. Explicit [`realloc`](crate::PendingHandle::realloc)
    /// never consults this value.
    pub initial_capacity: usize,
}

impl PendingConfig {
    /// Default capacity of a list created on first append.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl Default for PendingConfig {
    fn default() -> Self {
        Self::new()
    }
}
