//! Random number generation for map building
//!
//! Every random decision in the pipeline goes through [`UniformRng`], so a
//! seeded [`GameRng`] replays a map exactly and [`ScriptedRng`] can force
//! specific branches in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integers
pub trait UniformRng {
    /// Returns a value in `lower..=upper`
    ///
    /// Callers guarantee `lower <= upper`.
    fn uniform_int(&mut self, lower: usize, upper: usize) -> usize;

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.uniform_int(0, 1) == 1
    }

    /// Choose a random element from a slice
    ///
    /// Draws nothing when the slice is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.uniform_int(0, items.len() - 1)])
        }
    }

    /// Seed that replays this stream from the start, if there is one
    fn replay_seed(&self) -> Option<u64> {
        None
    }
}

impl<R: UniformRng + ?Sized> UniformRng for &mut R {
    fn uniform_int(&mut self, lower: usize, upper: usize) -> usize {
        (**self).uniform_int(lower, upper)
    }

    fn replay_seed(&self) -> Option<u64> {
        (**self).replay_seed()
    }
}

/// ChaCha8 stream keyed by a `u64`
///
/// The same seed always carves the same map. Serialized form is the bare
/// seed, so a stored map can be regenerated but not resumed mid-stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the OS, for a fresh map each run
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UniformRng for GameRng {
    fn uniform_int(&mut self, lower: usize, upper: usize) -> usize {
        debug_assert!(lower <= upper, "empty range {lower}..={upper}");
        self.rng.gen_range(lower..=upper)
    }

    fn replay_seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// Replays a fixed list of draws
///
/// Each draw is reduced into the requested range, so a script of small
/// numbers reads as "take option n". The script cycles when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "scripted rng needs at least one draw");
        Self { script, cursor: 0 }
    }

    /// Number of draws consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformRng for ScriptedRng {
    fn uniform_int(&mut self, lower: usize, upper: usize) -> usize {
        debug_assert!(lower <= upper, "empty range {lower}..={upper}");
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        lower + raw % (upper - lower + 1)
    }
}
