//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the barcode core and something
//! it does not control (time, randomness, print ids, the storage medium).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod kv;
pub mod random;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use kv::{KeyValueStore, KvError};
pub use random::RandomSource;
