//! Random tile spawning and board creation.
//!
//! Each spawn draws one uniform index over the empty cells, then one
//! weighted coin for the value: 2 with probability `1 - four_probability`,
//! otherwise 4. A full board draws nothing and is returned unchanged.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::config::{EngineConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_INITIAL_TILES};
use crate::core::rng::TileSource;

/// Where a tile was placed and with what value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
///
/// ```
/// use rust_2048::core::{Board, GameRng};
/// use rust_2048::rules::spawn_tile;
///
/// let mut rng = GameRng::new(1);
/// let board = spawn_tile(Board::EMPTY, &mut rng);
/// assert_eq!(board.count_empty(), 15);
/// assert!(board.sum() == 2 || board.sum() == 4);
/// ```
#[must_use]
pub fn spawn_tile<S: TileSource + ?Sized>(board: Board, source: &mut S) -> Board {
    match spawn_tile_with(board, source, DEFAULT_FOUR_PROBABILITY) {
        Some(spawn) => board.with_tile(spawn.row, spawn.col, spawn.value),
        None => board,
    }
}

/// Pick the cell and value for one spawn on `board`.
///
/// Returns `None` when the board has no empty cell. The board itself is
/// not modified; apply the result with [`Board::with_tile`].
pub fn spawn_tile_with<S: TileSource + ?Sized>(
    board: Board,
    source: &mut S,
    four_probability: f64,
) -> Option<Spawn> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[source.pick_index(empty.len())];
    let value = if source.chance(1.0 - four_probability) { 2 } else { 4 };
    Some(Spawn { row, col, value })
}

/// A fresh board: empty grid plus two independently spawned tiles.
#[must_use]
pub fn create_board<S: TileSource + ?Sized>(source: &mut S) -> Board {
    (0..DEFAULT_INITIAL_TILES).fold(Board::EMPTY, |board, _| spawn_tile(board, &mut *source))
}

/// A fresh board following `config` for tile count and 4-probability.
#[must_use]
pub fn create_board_with<S: TileSource + ?Sized>(source: &mut S, config: &EngineConfig) -> Board {
    (0..config.initial_tiles).fold(Board::EMPTY, |board, _| {
        match spawn_tile_with(board, &mut *source, config.four_probability) {
            Some(spawn) => board.with_tile(spawn.row, spawn.col, spawn.value),
            None => board,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use std::collections::VecDeque;

    /// Replays fixed index picks and coin results.
    struct Scripted {
        picks: VecDeque<usize>,
        coins: VecDeque<bool>,
    }

    impl Scripted {
        fn new(picks: &[usize], coins: &[bool]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
                coins: coins.iter().copied().collect(),
            }
        }
    }

    impl TileSource for Scripted {
        fn pick_index(&mut self, len: usize) -> usize {
            let pick = self.picks.pop_front().expect("script ran out of picks");
            assert!(pick < len);
            pick
        }

        fn chance(&mut self, _probability: f64) -> bool {
            self.coins.pop_front().expect("script ran out of coins")
        }
    }

    #[test]
    fn test_spawn_uses_source() {
        let mut source = Scripted::new(&[5], &[true]);
        let board = spawn_tile(Board::EMPTY, &mut source);
        assert_eq!(board.get(1, 1), 2);
        assert_eq!(board.count_empty(), 15);

        let mut source = Scripted::new(&[15], &[false]);
        let board = spawn_tile(Board::EMPTY, &mut source);
        assert_eq!(board.get(3, 3), 4);
    }

    #[test]
    fn test_spawn_indexes_only_empty_cells() {
        let board = Board::from_rows([[2, 0, 2, 0], [2; 4], [2; 4], [2; 4]]);
        let mut source = Scripted::new(&[1], &[true]);
        let spawned = spawn_tile(board, &mut source);
        assert_eq!(spawned.get(0, 3), 2);
        assert_eq!(spawned.get(0, 1), 0);
    }

    #[test]
    fn test_spawn_full_board_is_noop() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        // An empty script panics if touched.
        let mut source = Scripted::new(&[], &[]);
        assert_eq!(spawn_tile(board, &mut source), board);
        assert_eq!(spawn_tile_with(board, &mut source, 0.1), None);
    }

    #[test]
    fn test_spawn_single_empty_cell() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 0, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let spawned = spawn_tile(board, &mut rng);
            assert!(matches!(spawned.get(1, 2), 2 | 4));
            assert_eq!(spawned.with_tile(1, 2, 0), board);
        }
    }

    #[test]
    fn test_spawn_probability_extremes() {
        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            assert_eq!(spawn_tile_with(Board::EMPTY, &mut rng, 0.0).unwrap().value, 2);
            assert_eq!(spawn_tile_with(Board::EMPTY, &mut rng, 1.0).unwrap().value, 4);
        }
    }

    #[test]
    fn test_create_board() {
        let mut source = Scripted::new(&[0, 0], &[true, false]);
        let board = create_board(&mut source);
        assert_eq!(board.get(0, 0), 2);
        assert_eq!(board.get(0, 1), 4);
        assert_eq!(board.count_empty(), 14);
    }

    #[test]
    fn test_create_board_seeded_is_deterministic() {
        let a = create_board(&mut GameRng::new(42));
        let b = create_board(&mut GameRng::new(42));
        assert_eq!(a, b);
        assert_eq!(a.count_empty(), 14);
    }

    #[test]
    fn test_create_board_with_config() {
        let config = EngineConfig::new().with_initial_tiles(16).with_four_probability(1.0);
        let board = create_board_with(&mut GameRng::new(3), &config);
        assert!(board.is_full());
        assert!(board.cells().all(|v| v == 4));
    }
}
