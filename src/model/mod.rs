//! Barcode records and the print-sheet placement type.
//!
//! These are the flat records persisted by the store, serialized as JSON
//! with camelCase field names.

mod entry;
mod format;
mod slot;

pub use entry::{normalize_label, Entry, ID_DIGITS, ID_MAX, ID_MIN};
pub use format::{BarcodeFormat, RenderOptions};
pub use slot::{QueueSlotItem, SHEET_CAPACITY, SHEET_COLUMNS, SHEET_ROWS};
