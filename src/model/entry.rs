//! The allocated identifier record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::BarcodeFormat;

/// Number of decimal digits in every allocated id.
pub const ID_DIGITS: usize = 9;
/// Smallest allocatable id (no leading zero).
pub const ID_MIN: u64 = 100_000_000;
/// Largest allocatable id.
pub const ID_MAX: u64 = 999_999_999;

/// A persisted barcode identifier.
///
/// Entries are immutable once created; the only lifecycle event after
/// allocation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Nine decimal digits, unique within the history.
    pub id: String,
    /// When the entry was allocated.
    pub created_at: DateTime<Utc>,
    /// Optional user text; never empty when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Encoding scheme used to render the id.
    #[serde(default)]
    pub format: BarcodeFormat,
}

impl Entry {
    /// Builds an entry from a numeric id, normalizing the label.
    #[must_use]
    pub fn new(id: u64, created_at: DateTime<Utc>, label: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            created_at,
            label: normalize_label(label),
            format: BarcodeFormat::Code128,
        }
    }

    /// Returns the label or a dash when absent, for display.
    #[must_use]
    pub fn label_or_dash(&self) -> &str {
        self.label.as_deref().unwrap_or("-")
    }

    /// True when `id` is exactly nine ASCII digits without a leading zero.
    #[must_use]
    pub fn has_valid_id(&self) -> bool {
        self.id.len() == ID_DIGITS
            && self.id.bytes().all(|b| b.is_ascii_digit())
            && !self.id.starts_with('0')
    }
}

/// Trims a label; empty or whitespace-only input becomes `None`.
#[must_use]
pub fn normalize_label(label: Option<&str>) -> Option<String> {
    label.map(str::trim).filter(|l| !l.is_empty()).map(String::from)
}
