//! Live clock using the system clock.

use chrono::{DateTime, SubsecRound, Utc};

use crate::ports::clock::Clock;

/// Live clock returning the current time at millisecond precision.
///
/// Persisted `createdAt` values never carry more than three fractional digits.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
