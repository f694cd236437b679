//! Counter-based ID generator.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::IdGenerator;

/// Produces `print-1`, `print-2`, ... in call order.
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at `print-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("print-{n}")
    }
}
