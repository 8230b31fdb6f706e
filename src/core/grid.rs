//! Cell-index math for the row-major board.
//!
//! Cells are numbered 1..=100: `index = row * 10 + col + 1`. The numbering
//! makes horizontal neighbors numerically adjacent across row edges (cell 10
//! and cell 11 differ by one but sit on different rows), so every neighbor
//! computation must reject board edges before doing index arithmetic.

use crate::types::{Direction, BOARD_SIZE, CELL_COUNT};

/// All four orthogonal directions, for neighbor scans.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Cell index at (row, col), both zero-based.
#[inline]
pub fn index(row: u16, col: u16) -> u16 {
    row * BOARD_SIZE + col + 1
}

/// Move one cell in `dir`. Returns `None` when the move leaves the board:
/// Up from the top row, Down from the bottom row, Left from column 0,
/// Right from the last column.
pub fn step(cell: u16, dir: Direction) -> Option<u16> {
    match dir {
        Direction::Up => (cell > BOARD_SIZE).then(|| cell - BOARD_SIZE),
        Direction::Down => (cell <= CELL_COUNT - BOARD_SIZE).then(|| cell + BOARD_SIZE),
        Direction::Left => (cell % BOARD_SIZE != 1).then(|| cell - 1),
        Direction::Right => (cell % BOARD_SIZE != 0).then(|| cell + 1),
    }
}

/// Orthogonal adjacency on the board. Excludes wrap-around pairs: 10 and 11
/// are not adjacent even though their indices differ by one.
pub fn is_adjacent(a: u16, b: u16) -> bool {
    DIRECTIONS.iter().any(|&dir| step(a, dir) == Some(b))
}
