//! Error types for game module
//!
//! Board access is bounds-checked, and moves handed to the executor must have
//! been verified against the candidate list. Every failure here is local: the
//! caller rejects the input and the game carries on.

use crate::game::types::Square;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinates outside the 8x8 board
    #[error("Square ({rank}, {file}) is off the board (indices must be 0-7)")]
    OutOfBounds { rank: i8, file: i8 },

    /// No piece at the origin of a move being verified
    #[error("No piece at square {square}")]
    EmptySquare { square: Square },

    /// Destination is not among the origin piece's candidate moves
    #[error("Illegal destination: {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },

    /// Text that does not name a square
    #[error("Cannot parse square from {input:?} (expected e.g. \"e2\" or \"6,4\")")]
    InvalidSquareName { input: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
