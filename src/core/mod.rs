//! Core engine types: board, directions, RNG, configuration, errors.
//!
//! Nothing in this module knows how tiles move. The game operations that
//! transform boards live in `rules`.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{Board, EmptyCells, Grid, Row, MAX_TILE, SIZE, can_merge, is_valid_tile};
pub use config::{EngineConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_INITIAL_TILES};
pub use direction::Direction;
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState, TileSource};
