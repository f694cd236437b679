//! Unique 9-digit identifier allocation.
//!
//! Ids are drawn uniformly from `[ID_MIN, ID_MAX]` and probed against the
//! current history. With 900 million possible values a collision is rare
//! until the history grows enormous; the retry budget only guards against
//! pathological input such as an exhausted id space or a broken random source.

use std::collections::HashSet;

use crate::context::ServiceContext;
use crate::error::AllocationFailure;
use crate::model::{Entry, ID_MAX, ID_MIN};
use crate::ports::{Clock, RandomSource};

/// Attempts made before giving up when no budget is configured.
pub const DEFAULT_RETRY_BUDGET: u32 = 100;

/// Draws fresh ids and stamps new entries.
pub struct IdAllocator<'a> {
    random: &'a dyn RandomSource,
    clock: &'a dyn Clock,
    retry_budget: u32,
}

impl<'a> IdAllocator<'a> {
    /// Creates an allocator over explicit ports.
    #[must_use]
    pub fn new(random: &'a dyn RandomSource, clock: &'a dyn Clock, retry_budget: u32) -> Self {
        Self { random, clock, retry_budget }
    }

    /// Creates an allocator using the context's random source and clock.
    #[must_use]
    pub fn from_context(ctx: &'a ServiceContext, retry_budget: u32) -> Self {
        Self::new(ctx.random.as_ref(), ctx.clock.as_ref(), retry_budget)
    }

    /// Allocates an entry whose id is not in `existing_ids`.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` when every draw within the retry budget
    /// collided with an existing id.
    pub fn allocate(
        &self,
        existing_ids: &HashSet<String>,
        label: Option<&str>,
    ) -> Result<Entry, AllocationFailure> {
        for attempt in 1..=self.retry_budget {
            let candidate = self.random.next_in_range(ID_MIN, ID_MAX);
            if existing_ids.contains(&candidate.to_string()) {
                tracing::debug!(candidate, attempt, "id collision, redrawing");
                continue;
            }
            return Ok(Entry::new(candidate, self.clock.now(), label));
        }
        tracing::warn!(attempts = self.retry_budget, "id allocation exhausted its retry budget");
        Err(AllocationFailure { attempts: self.retry_budget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedClock, ScriptedRandom};
    use crate::model::BarcodeFormat;

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn allocates_nine_digit_id_with_label() {
        let random = ScriptedRandom::constant(123_456_789);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);

        let entry = allocator.allocate(&HashSet::new(), Some("  Asset 1 ")).unwrap();

        assert_eq!(entry.id, "123456789");
        assert!(entry.has_valid_id());
        assert_eq!(entry.label.as_deref(), Some("Asset 1"));
        assert_eq!(entry.format, BarcodeFormat::Code128);
        assert_eq!(entry.created_at, clock.now());
    }

    #[test]
    fn whitespace_label_is_stored_as_absent() {
        let random = ScriptedRandom::constant(123_456_789);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);

        let entry = allocator.allocate(&HashSet::new(), Some("   ")).unwrap();
        assert_eq!(entry.label, None);
    }

    #[test]
    fn redraws_past_collisions() {
        let random = ScriptedRandom::new(vec![111_111_111, 222_222_222, 333_333_333]);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);

        let entry = allocator.allocate(&ids(&["111111111", "222222222"]), None).unwrap();

        assert_eq!(entry.id, "333333333");
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn exhausts_after_exactly_the_budget() {
        let random = ScriptedRandom::constant(500_000_000);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);
        let existing = ids(&["500000000"]);

        let err = allocator.allocate(&existing, Some("never")).unwrap_err();

        assert_eq!(err, AllocationFailure { attempts: 100 });
        assert_eq!(random.draws(), 100);
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn last_attempt_can_still_succeed() {
        let mut script = vec![500_000_000; 99];
        script.push(600_000_000);
        let random = ScriptedRandom::new(script);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);

        let entry = allocator.allocate(&ids(&["500000000"]), None).unwrap();
        assert_eq!(entry.id, "600000000");
        assert_eq!(random.draws(), 100);
    }

    #[test]
    fn seeded_draws_stay_in_range() {
        let random = ScriptedRandom::seeded(7);
        let clock = FixedClock::default();
        let allocator = IdAllocator::new(&random, &clock, DEFAULT_RETRY_BUDGET);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let entry = allocator.allocate(&seen, None).unwrap();
            assert!(entry.has_valid_id());
            assert!(seen.insert(entry.id));
        }
    }
}
