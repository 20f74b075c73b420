//! Injectable randomness for tile spawning.
//!
//! The engine never touches a global random source. It draws from a
//! [`TileRng`] handed in at construction, so tests substitute
//! deterministic sequences and games replay from a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of randomness for tile spawning.
pub trait TileRng {
    /// Picks a uniform index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Returns the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// rand-backed source, seedable for reproducible games.
#[derive(Debug, Clone)]
pub struct RandTileRng {
    rng: SmallRng,
}

impl RandTileRng {
    /// Creates a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileRng for RandTileRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Deterministic source that replays scripted draws, for tests.
///
/// When a queue runs out the source falls back to `0` / `0.0`: the first
/// empty cell is picked and the spawned tile is a 2.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    indices: VecDeque<usize>,
    floats: VecDeque<f64>,
}

impl ScriptedRng {
    /// Creates a source with no scripted draws (always first cell, always 2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with scripted index and float draws.
    pub fn with_draws(
        indices: impl IntoIterator<Item = usize>,
        floats: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            floats: floats.into_iter().collect(),
        }
    }
}

impl TileRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.0)
    }
}
