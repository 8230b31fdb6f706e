//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length. The board is BOARD_SIZE x BOARD_SIZE cells,
/// numbered 1..=CELL_COUNT in row-major order.
pub const BOARD_SIZE: u16 = 10;
pub const CELL_COUNT: u16 = BOARD_SIZE * BOARD_SIZE;

/// Cell the snake starts on (board center).
pub const START_CELL: u16 = 44;

/// Game timing constants (in milliseconds)
pub const MOVE_INTERVAL_MS: u32 = 300;
pub const BOMB_FUSE_MS: u32 = 2000;
pub const BOOST_HIDDEN_MS: u32 = 15_000;
pub const BOOST_ACTIVE_MS: u32 = 5_000;

/// One-in-N odds that an apple next to the new head turns into a bomb.
pub const BOMB_ODDS: u32 = 4;

/// Movement direction of the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The reverse direction. A snake longer than one cell would fold into
    /// itself reversing instantly, so requests for the opposite direction
    /// are rejected.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Discrete sound cue emitted by the simulation, drained by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Apple or boost consumed.
    Eat,
    /// Fatal collision or boundary exit.
    GameOver,
}
