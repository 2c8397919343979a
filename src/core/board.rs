//! The 4x4 grid and its invariants.
//!
//! A `Board` is a plain value: every operation returns a new board and
//! never mutates its input. Cells hold `0` for empty or a power of two.
//!
//! ```
//! use rust_2048::core::Board;
//!
//! let board = Board::from_rows([
//!     [2, 0, 0, 0],
//!     [0, 4, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 8],
//! ]);
//! assert_eq!(board.sum(), 14);
//! assert_eq!(board.count_empty(), 13);
//! assert_eq!(board.max_tile(), 8);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::error::{EngineError, Result};

/// Side length of the board.
pub const SIZE: usize = 4;

/// Largest tile a cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// A single row (or rotated column) of cell values.
pub type Row = [u32; SIZE];

/// Row-major grid of cell values.
pub type Grid = [Row; SIZE];

/// Empty cell coordinates, row-major. Never more than 16 entries.
pub type EmptyCells = SmallVec<[(usize, usize); SIZE * SIZE]>;

/// A 4x4 board of tile values.
///
/// Exchanged with callers as a plain nested array (`[[u32; 4]; 4]`),
/// including when serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(Grid);

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Wrap a grid without validation.
    ///
    /// Callers that cannot vouch for their input should use
    /// [`Board::try_from_rows`].
    #[must_use]
    pub const fn from_rows(rows: Grid) -> Self {
        Self(rows)
    }

    /// Wrap a grid, rejecting any cell that is neither 0 nor a power of two.
    pub fn try_from_rows(rows: Grid) -> Result<Self> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self(rows))
    }

    /// Borrow the underlying grid.
    #[must_use]
    pub const fn rows(&self) -> &Grid {
        &self.0
    }

    /// Consume the board, returning the grid.
    #[must_use]
    pub const fn into_rows(self) -> Grid {
        self.0
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Return a copy of this board with `(row, col)` set to `value`.
    #[must_use]
    pub fn with_tile(mut self, row: usize, col: usize, value: u32) -> Self {
        self.0[row][col] = value;
        self
    }

    /// Total of all cell values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells().map(u64::from).sum()
    }

    /// Highest tile on the board, or 0 if empty.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells().max().unwrap_or(0)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&v| v == 0).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells().all(|v| v != 0)
    }

    /// Coordinates of every empty cell in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        let mut cells = EmptyCells::new();
        for (row, values) in self.0.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Iterate over all cell values row-major.
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }
}

/// True for 0 (empty) and for powers of two from 2 up to [`MAX_TILE`].
#[must_use]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// True when two adjacent cells would combine into one tile.
#[must_use]
pub fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

impl From<Grid> for Board {
    fn from(rows: Grid) -> Self {
        Board::from_rows(rows)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.into_rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "+------".repeat(SIZE) + "+";
        writeln!(f, "{border}")?;
        for row in &self.0 {
            for &value in row {
                if value == 0 {
                    write!(f, "|      ")?;
                } else {
                    write!(f, "|{value:^6}")?;
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
