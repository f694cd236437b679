//! Random source that replays a fixed script of values.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

enum Script {
    Values { values: Vec<u64>, cursor: usize },
    Seeded(StdRng),
}

/// Deterministic `RandomSource` for tests.
///
/// A scripted source cycles through its values, clamping each into the
/// requested range. A seeded source draws from a `StdRng` so long runs are
/// reproducible without listing every value. Both count their draws.
pub struct ScriptedRandom {
    state: Mutex<State>,
}

struct State {
    script: Script,
    draws: usize,
}

impl ScriptedRandom {
    /// Cycles through `values` in order, wrapping at the end.
    ///
    /// An empty script behaves like `vec![0]`, which clamps to the range's low end.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self::from_script(Script::Values { values, cursor: 0 })
    }

    /// Returns the same value on every draw.
    #[must_use]
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Draws from a seeded `StdRng`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_script(Script::Seeded(StdRng::seed_from_u64(seed)))
    }

    /// Number of values drawn so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.state.lock().expect("random script lock poisoned").draws
    }

    fn from_script(script: Script) -> Self {
        Self { state: Mutex::new(State { script, draws: 0 }) }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&self, low: u64, high: u64) -> u64 {
        let mut state = self.state.lock().expect("random script lock poisoned");
        state.draws += 1;
        match &mut state.script {
            Script::Values { values, cursor } => {
                let value = values[*cursor % values.len()];
                *cursor += 1;
                value.clamp(low, high)
            }
            Script::Seeded(rng) => rng.gen_range(low..=high),
        }
    }
}
