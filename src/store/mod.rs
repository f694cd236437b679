//! Barcode store: persistence layer for history and the print queue.
//!
//! Each list is one JSON array under its own key of the `KeyValueStore`
//! port:
//!
//! ```text
//! barcode_history_v1      [Entry, ...]          most recent first
//! barcode_print_queue_v1  [QueueSlotItem, ...]  sheet order
//! ```
//!
//! No operation here returns an error. Read failures and malformed data load
//! as an empty list; write failures leave the previous value in place. Both
//! are logged at `warn`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::ServiceContext;
use crate::model::{Entry, QueueSlotItem, SHEET_CAPACITY};

/// Storage key for the history list.
pub const HISTORY_KEY: &str = "barcode_history_v1";
/// Storage key for the print queue.
pub const QUEUE_KEY: &str = "barcode_print_queue_v1";

/// Persistence layer for barcode entries and sheet placements.
///
/// All I/O goes through `ctx.kv` so the store works against the directory
/// adapter and the in-memory fake alike.
pub struct BarcodeStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BarcodeStore<'a> {
    /// Creates a store over the context's storage medium.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Returns the stored history, most recent first.
    #[must_use]
    pub fn get_history(&self) -> Vec<Entry> {
        self.read_list(HISTORY_KEY)
    }

    /// Saves `entry` at the front of the history, replacing any record with
    /// the same id.
    pub fn save_entry(&self, entry: &Entry) {
        let mut history = self.get_history();
        history.retain(|e| e.id != entry.id);
        history.insert(0, entry.clone());
        self.write_list(HISTORY_KEY, &history);
    }

    /// Removes every record with `id` and returns what remains.
    #[must_use = "the returned history replaces any cached copy"]
    pub fn delete_entry(&self, id: &str) -> Vec<Entry> {
        let mut history = self.get_history();
        history.retain(|e| e.id != id);
        self.write_list(HISTORY_KEY, &history);
        history
    }

    /// Erases the stored history.
    pub fn clear_history(&self) {
        if let Err(e) = self.ctx.kv.remove(HISTORY_KEY) {
            tracing::warn!(key = HISTORY_KEY, error = %e, "failed to clear stored list");
        }
    }

    /// Returns the stored print queue in sheet order, capped at the sheet size.
    #[must_use]
    pub fn get_queue(&self) -> Vec<QueueSlotItem> {
        let mut queue: Vec<QueueSlotItem> = self.read_list(QUEUE_KEY);
        if queue.len() > SHEET_CAPACITY {
            tracing::warn!(
                stored = queue.len(),
                capacity = SHEET_CAPACITY,
                "stored print queue exceeds sheet capacity, dropping overflow"
            );
            queue.truncate(SHEET_CAPACITY);
        }
        queue
    }

    /// Persists the full print queue.
    pub fn save_queue(&self, queue: &[QueueSlotItem]) {
        self.write_list(QUEUE_KEY, queue);
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.ctx.kv.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored list");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "stored list is malformed, treating as empty");
            Vec::new()
        })
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize list, write dropped");
                return;
            }
        };
        if let Err(e) = self.ctx.kv.set(key, &json) {
            tracing::warn!(key, error = %e, "failed to write stored list");
        }
    }
}
