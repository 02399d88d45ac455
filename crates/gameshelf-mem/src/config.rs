//! Configuration for the in-memory catalog store.

use std::time::Duration;

/// Configuration for [`MemoryCatalogRepository`].
///
/// The latency is an explicit, injectable parameter rather than a hidden
/// sleep, so test suites can run the store with no delay at all.
///
/// [`MemoryCatalogRepository`]: crate::MemoryCatalogRepository
#[derive(Debug, Clone, Copy)]
pub struct MemoryStoreConfig {
    /// Artificial delay applied at the start of every store operation,
    /// modeling network latency.
    pub latency: Duration,
}

impl MemoryStoreConfig {
    /// Default simulated network latency per operation.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

    /// Configuration with no artificial delay.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }
}
