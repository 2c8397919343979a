//! # rust-2048
//!
//! A 2048 tile-merging puzzle engine: pure state transformations on a
//! fixed 4x4 grid, with no rendering, input handling or I/O of its own.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule takes a `Board` by value and returns a
//!    new one. Boards are `Copy`; nothing is mutated in place.
//!
//! 2. **Injectable Randomness**: Spawns draw from a `TileSource`. The
//!    seeded `GameRng` makes whole games reproducible; tests script it.
//!
//! 3. **Caller-Visible No-Ops**: `move_board` returns the candidate board.
//!    Callers compare it with the input and spawn only when they differ.
//!    `Session` does this for you and reports it in `MoveOutcome`.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `rules`: Row primitives, rotation, moves, spawning, game-over detection
//! - `session`: Ready/Playing/GameOver controller and snapshots
//!
//! ## Example
//!
//! ```
//! use rust_2048::{create_board, is_game_over, move_board, spawn_tile, Direction, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let board = create_board(&mut rng);
//!
//! let moved = move_board(Direction::Left, board);
//! let board = if moved != board { spawn_tile(moved, &mut rng) } else { board };
//! assert!(!is_game_over(board));
//! ```

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Grid, Row, MAX_TILE, SIZE, is_valid_tile,
    Direction,
    GameRng, GameRngState, TileSource,
    EngineConfig,
    EngineError, Result,
};

pub use crate::rules::{
    create_board, create_board_with,
    move_board, move_board_scored, move_by_name, can_move, legal_moves,
    spawn_tile, spawn_tile_with, Spawn,
    is_game_over,
};

pub use crate::session::{MoveOutcome, Phase, Session, SessionSnapshot};
