//! Run counters
//!
//! Plain fields, no atomics: the engine is single-threaded by contract.

/// Hit/fault/eviction counters for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagingStats {
    /// Resolutions that found the page resident
    pub hits: u64,
    /// Resolutions that had to load the page
    pub faults: u64,
    /// Faults that had to evict a resident page first
    pub evictions: u64,
}

impl PagingStats {
    /// Total successful resolutions.
    pub fn resolutions(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of resolutions that faulted, in `[0, 1]`. Zero when
    /// nothing has been resolved yet.
    pub fn fault_rate(&self) -> f64 {
        let total = self.resolutions();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}
