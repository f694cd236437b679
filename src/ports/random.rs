//! Random source port used by the identifier allocator.

/// Draws uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Returns a uniform random integer in the inclusive range `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in_range(&self, low: u64, high: u64) -> u64;
}
