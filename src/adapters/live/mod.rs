//! Live adapters for real external interactions.

pub mod clock;
pub mod id_gen;
pub mod kv;
pub mod random;
