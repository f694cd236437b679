//! In-process adapters with deterministic behavior.
//!
//! These back `ServiceContext::in_memory` and the test suites. Nothing here
//! touches the disk, the system clock, or the OS random source.

pub mod clock;
pub mod id_gen;
pub mod kv;
pub mod random;

pub use clock::FixedClock;
pub use id_gen::SequentialIdGenerator;
pub use kv::MemoryKeyValueStore;
pub use random::ScriptedRandom;
