//! Terminal state detection.

use crate::core::board::{can_merge, Board, SIZE};

/// True when the board has no empty cell and no equal neighbours.
///
/// Rows and columns are scanned exhaustively; the first empty cell or
/// mergeable pair ends the scan.
///
/// ```
/// use rust_2048::core::Board;
/// use rust_2048::rules::is_game_over;
///
/// let stuck = Board::from_rows([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ]);
/// assert!(is_game_over(stuck));
/// assert!(!is_game_over(stuck.with_tile(2, 1, 0)));
/// ```
#[must_use]
pub fn is_game_over(board: Board) -> bool {
    let grid = board.rows();

    if grid.iter().flatten().any(|&v| v == 0) {
        return false;
    }

    for row in grid {
        if row.windows(2).any(|pair| can_merge(pair[0], pair[1])) {
            return false;
        }
    }

    for col in 0..SIZE {
        if (0..SIZE - 1).any(|r| can_merge(grid[r][col], grid[r + 1][col])) {
            return false;
        }
    }

    true
}

impl Board {
    /// Method form of [`is_game_over`].
    #[must_use]
    pub fn is_game_over(self) -> bool {
        is_game_over(self)
    }
}
