//! Sources of die values.

use rand::Rng;

use super::constants::{MAX_DIE, MIN_DIE};

/// Something that can be asked for one die value at a time.
///
/// Implementations should return values in `1..=6`. A turn rejects the
/// whole roll if any other value comes back.
pub trait DieSource {
    fn roll_die(&mut self) -> u8;
}

impl<F> DieSource for F
where
    F: FnMut() -> u8,
{
    fn roll_die(&mut self) -> u8 {
        self()
    }
}

/// Fair six-sided die backed by the thread-local RNG.
#[derive(Debug)]
pub struct RandomDie {
    rng: rand::rngs::ThreadRng,
}

impl RandomDie {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomDie {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for RandomDie {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(MIN_DIE..=MAX_DIE)
    }
}

/// Replays a fixed sequence of die values, starting over once the
/// sequence runs out. Useful for tests and replays.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: Vec<u8>,
    idx: usize,
}

impl ScriptedDice {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<u8>) -> Self {
        assert!(!script.is_empty(), "scripted dice need at least one value");
        Self { script, idx: 0 }
    }

    /// How many values have been handed out so far.
    pub fn rolled(&self) -> usize {
        self.idx
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let value = self.script[self.idx % self.script.len()];
        self.idx += 1;
        value
    }
}
