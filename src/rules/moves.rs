//! Directional moves.
//!
//! `move_board` is pure: it never spawns and never reports whether anything
//! changed. Callers compare the result against the input with `==` and must
//! skip the spawn when the two are equal.
//!
//! ```
//! use rust_2048::core::{Board, Direction};
//! use rust_2048::rules::move_board;
//!
//! let board = Board::from_rows([
//!     [2, 0, 2, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//! let moved = move_board(Direction::Left, board);
//! assert_eq!(moved.rows()[0], [4, 0, 0, 0]);
//!
//! // Moving again changes nothing: a no-op.
//! assert_eq!(move_board(Direction::Left, moved), moved);
//! ```

use crate::core::board::{Board, Grid, Row};
use crate::core::direction::Direction;
use crate::core::error::Result;

use super::line::{operate_row, reverse_row, rotate_clockwise, rotate_counter_clockwise};

/// Slide and merge every tile in `direction`.
#[must_use]
pub fn move_board(direction: Direction, board: Board) -> Board {
    move_board_scored(direction, board).0
}

/// Like [`move_board`], also returning the merge score for the move.
#[must_use]
pub fn move_board_scored(direction: Direction, board: Board) -> (Board, u64) {
    let grid = board.into_rows();
    let (grid, gained) = match direction {
        Direction::Left => operate_rows(grid, |row| row),
        Direction::Right => operate_rows(grid, reverse_row),
        Direction::Up => {
            let (rotated, gained) = operate_rows(rotate_counter_clockwise(grid), |row| row);
            (rotate_clockwise(rotated), gained)
        }
        Direction::Down => {
            let (rotated, gained) = operate_rows(rotate_clockwise(grid), |row| row);
            (rotate_counter_clockwise(rotated), gained)
        }
    };
    (Board::from_rows(grid), gained)
}

/// Parse `name` as a direction, then move.
///
/// An unrecognized name is returned as `EngineError::InvalidDirection`.
pub fn move_by_name(name: &str, board: Board) -> Result<Board> {
    let direction = name.parse::<Direction>()?;
    Ok(move_board(direction, board))
}

/// True when moving in `direction` would change the board.
#[must_use]
pub fn can_move(direction: Direction, board: Board) -> bool {
    move_board(direction, board) != board
}

/// Directions whose move is not a no-op.
#[must_use]
pub fn legal_moves(board: Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(dir, board))
        .collect()
}

/// Apply `operate_row` to each row, with `orient` applied before and after.
///
/// `orient` must be its own inverse (identity or reversal).
fn operate_rows(mut grid: Grid, orient: fn(Row) -> Row) -> (Grid, u64) {
    let mut gained = 0;
    for row in grid.iter_mut() {
        let (operated, row_gain) = operate_row(orient(*row));
        *row = orient(operated);
        gained += row_gain;
    }
    (grid, gained)
}

impl Board {
    /// Method form of [`move_board`].
    #[must_use]
    pub fn shift(self, direction: Direction) -> Board {
        move_board(direction, self)
    }

    /// Method form of [`move_board_scored`].
    #[must_use]
    pub fn shift_scored(self, direction: Direction) -> (Board, u64) {
        move_board_scored(direction, self)
    }
}
