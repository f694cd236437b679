//! Live random source backed by the thread-local RNG.

use rand::Rng;

use crate::ports::RandomSource;

/// Draws from `rand::thread_rng`.
pub struct LiveRandom;

impl RandomSource for LiveRandom {
    fn next_in_range(&self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..=high)
    }
}
