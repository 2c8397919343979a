//! Row-level primitives and grid rotation.
//!
//! Every directional move is built from `operate_row`, which always works
//! toward index 0, plus a reversal or rotation that brings the target edge
//! to the left and a second one that undoes it.

use crate::core::board::{can_merge, Grid, Row, SIZE};

/// Compact non-zero values toward index 0, keeping their order.
#[must_use]
pub fn slide_row(row: Row) -> Row {
    let mut out = [0; SIZE];
    for (slot, value) in out.iter_mut().zip(row.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    out
}

/// Merge equal adjacent pairs left to right, at most once per tile.
///
/// Returns the merged row and the sum of the values created by merges.
/// The row is not re-slid. A doubled cell is not compared against its
/// right neighbour again in the same pass. A pair of `MAX_TILE`s stays
/// unmerged.
#[must_use]
pub fn combine_row(mut row: Row) -> (Row, u64) {
    let mut gained = 0;
    let mut i = 0;
    while i + 1 < SIZE {
        if can_merge(row[i], row[i + 1]) {
            row[i] *= 2;
            row[i + 1] = 0;
            gained += u64::from(row[i]);
            i += 2;
        } else {
            i += 1;
        }
    }
    (row, gained)
}

/// Slide, combine, slide: the full leftward move for one row.
#[must_use]
pub fn operate_row(row: Row) -> (Row, u64) {
    let (combined, gained) = combine_row(slide_row(row));
    (slide_row(combined), gained)
}

/// Row with its cells in reverse order.
#[must_use]
pub fn reverse_row(mut row: Row) -> Row {
    row.reverse();
    row
}

/// Rotate a grid 90 degrees clockwise.
///
/// Row `r` of the result is column `r` of the input read bottom to top.
#[must_use]
pub fn rotate_clockwise(grid: Grid) -> Grid {
    let mut out = [[0; SIZE]; SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = grid[SIZE - 1 - c][r];
        }
    }
    out
}

/// Rotate a grid 90 degrees counter-clockwise.
///
/// Row `r` of the result is column `SIZE - 1 - r` of the input read top
/// to bottom.
#[must_use]
pub fn rotate_counter_clockwise(grid: Grid) -> Grid {
    let mut out = [[0; SIZE]; SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = grid[c][SIZE - 1 - r];
        }
    }
    out
}
