//! Clock that always reports the same instant.

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

/// Returns a fixed time from every `now()` call.
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to `at`.
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
