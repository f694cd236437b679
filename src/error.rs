//! Domain errors surfaced to the user.
//!
//! Storage faults are deliberately absent: the store absorbs them.

use thiserror::Error;

/// The allocator ran out of attempts without drawing a free id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not allocate a unique id after {attempts} attempts")]
pub struct AllocationFailure {
    /// Number of ids drawn before giving up.
    pub attempts: u32,
}

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Id allocation exhausted its retry budget.
    #[error(transparent)]
    Allocation(#[from] AllocationFailure),
    /// The print sheet has no free slot.
    #[error("print sheet is full ({capacity} slots)")]
    QueueFull {
        /// Sheet capacity.
        capacity: usize,
    },
    /// No entry was selected, or the requested id is not in history.
    #[error("no barcode selected")]
    NoEntry,
}
