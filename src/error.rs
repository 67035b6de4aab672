//! Error types for maze generation and the terminal session

use std::fmt;
use std::io;

/// Main error type for the game
#[derive(Debug)]
pub enum GameError {
    /// Maze generation was asked for a grid with a zero-sized axis
    InvalidDimension {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Terminal I/O failure while polling input or drawing
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid maze dimensions {rows}x{cols}: both axes must be at least 1")
            }
            Self::Io(source) => write!(f, "terminal I/O error: {source}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::InvalidDimension { .. } => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GameError>;
