//! Engine configuration.
//!
//! The board size is fixed at 4x4. What a caller may tune is the spawn
//! distribution, the number of opening tiles and the RNG seed.

use serde::{Deserialize, Serialize};

use super::board::SIZE;
use super::error::{EngineError, Result};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed on a fresh board.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the spawn RNG.
    /// Same seed and same moves produce the same game.
    pub seed: u64,

    /// Probability in `[0, 1]` that a spawn places a 4.
    pub four_probability: f64,

    /// Number of tiles spawned onto the empty board at start (1-16).
    pub initial_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of opening tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if !(1..=SIZE * SIZE).contains(&self.initial_tiles) {
            return Err(EngineError::InvalidConfig(format!(
                "initial_tiles must be within 1..={}, got {}",
                SIZE * SIZE,
                self.initial_tiles
            )));
        }
        Ok(())
    }
}
