//! Corner-to-corner maze game for the terminal.
//!
//! A perfect maze is carved once at startup with recursive backtracking,
//! then the player steers from the top-left cell to the bottom-right one
//! with the arrow keys. Generation and movement rules live in [`maze`] and
//! [`game`]; the crossterm presentation pieces live in [`render`], [`input`]
//! and [`audio`].

/// Sound cues for game events
pub mod audio;
/// Error type shared across the crate
pub mod error;
/// Player state, movement legality and the win condition
pub mod game;
/// Keyboard polling and held-key tracking
pub mod input;
/// Maze grid model and recursive-backtracking generation
pub mod maze;
/// Incremental terminal renderer
pub mod render;

pub use error::{GameError, Result};
