//! Terminal snake.
//!
//! The simulation (`core`) is pure and deterministic: it owns the snake, the
//! special cells and all timing state, and is advanced by feeding it elapsed
//! milliseconds. The terminal front end (`term`, `input`) is a collaborator
//! that forwards key presses, renders the state each frame and plays cues.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
