//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::kv::DirKeyValueStore;
use crate::adapters::live::random::LiveRandom;
use crate::adapters::memory::{
    FixedClock, MemoryKeyValueStore, ScriptedRandom, SequentialIdGenerator,
};
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::ports::kv::KeyValueStore;
use crate::ports::random::RandomSource;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different adapter sets (live or in-memory); fields stay public so tests can
/// swap a single port.
pub struct ServiceContext {
    /// Clock for stamping entry creation.
    pub clock: Box<dyn Clock>,
    /// Random source for id allocation.
    pub random: Box<dyn RandomSource>,
    /// Generator for print-slot ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Storage medium for history and queue.
    pub kv: Box<dyn KeyValueStore>,
}

impl ServiceContext {
    /// Creates a live context persisting under `store_root`.
    #[must_use]
    pub fn live(store_root: &Path) -> Self {
        Self {
            clock: Box::new(LiveClock),
            random: Box::new(LiveRandom),
            id_gen: Box::new(LiveIdGenerator),
            kv: Box::new(DirKeyValueStore::new(store_root)),
        }
    }

    /// Creates a fully deterministic context with nothing persisted to disk.
    ///
    /// The random source is seeded, the clock is pinned, and print ids count up
    /// from `print-1`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            clock: Box::new(FixedClock::default()),
            random: Box::new(ScriptedRandom::seeded(0)),
            id_gen: Box::new(SequentialIdGenerator::new()),
            kv: Box::new(MemoryKeyValueStore::new()),
        }
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    /// Replaces the storage medium.
    #[must_use]
    pub fn with_kv(mut self, kv: impl KeyValueStore + 'static) -> Self {
        self.kv = Box::new(kv);
        self
    }
}
