//! Print-sheet placements.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Number of label positions on one A4 sheet.
pub const SHEET_CAPACITY: usize = 20;
/// Columns in the sheet grid.
pub const SHEET_COLUMNS: usize = 4;
/// Rows in the sheet grid.
pub const SHEET_ROWS: usize = 5;

/// One occupied position on the print sheet.
///
/// Holds a copy of the entry as it was when placed, plus a `print_id` that
/// tells apart several placements of the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSlotItem {
    /// Snapshot of the placed entry.
    #[serde(flatten)]
    pub entry: Entry,
    /// Unique per placement.
    pub print_id: String,
}

impl QueueSlotItem {
    /// Places a copy of `entry` under a fresh `print_id`.
    #[must_use]
    pub fn new(entry: &Entry, print_id: String) -> Self {
        Self { entry: entry.clone(), print_id }
    }

    /// The placed entry's barcode id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.entry.id
    }
}
