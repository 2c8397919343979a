//! Game rules as pure functions over `Board`.
//!
//! - `line`: row slide/combine primitives and grid rotation
//! - `moves`: the four directional moves
//! - `spawn`: random tile placement and board creation
//! - `terminal`: game-over detection
//!
//! None of these functions mutate their input or touch shared state. The
//! only randomness enters through the `TileSource` passed to `spawn`.

pub mod line;
pub mod moves;
pub mod spawn;
pub mod terminal;

pub use line::{combine_row, operate_row, reverse_row, rotate_clockwise, rotate_counter_clockwise, slide_row};
pub use moves::{can_move, legal_moves, move_board, move_board_scored, move_by_name};
pub use spawn::{create_board, create_board_with, spawn_tile, spawn_tile_with, Spawn};
pub use terminal::is_game_over;
