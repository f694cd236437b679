//! ID generator port for print-queue insertion ids.

/// Generates identifiers for print-sheet placements.
///
/// Every call must return a value distinct from all previous calls, since the
/// same entry may occupy several slots and each slot is removed by this id.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
