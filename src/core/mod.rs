//! Core game logic module - pure, deterministic, and testable
//!
//! Everything the game rules need lives here, with zero dependencies on UI
//! or I/O. Same seed plus same inputs replays the identical game.
//!
//! - [`grid`]: cell-index math for the row-major 10x10 board
//! - [`game`]: the tick simulation (snake movement, apple/bomb/boost, score)
//! - [`rng`]: seeded random source for cell sampling and the bomb roll

pub mod game;
pub mod grid;
pub mod rng;

pub use game::GameState;
pub use rng::GameRng;
