//! Clock port for stamping entry creation times.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Tests substitute a fixed clock so `created_at` values are predictable.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
