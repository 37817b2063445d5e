//! Display-update signals emitted by [`GameState::activate_square`](crate::game::GameState::activate_square)

use std::fmt;

use serde::Serialize;

use crate::game::pieces::{Piece, PieceColor, PieceType};
use crate::game::resources::GameOutcome;
use crate::game::types::Square;

/// What a completed move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// Result of one square activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Nothing changed (game over, or no own piece on an idle click)
    Ignored,
    /// A piece was selected or reselected
    Selected { origin: Square, piece: Piece, candidates: usize },
    /// The pending selection was dropped
    Deselected,
    /// A move was made and the turn passed to `next`
    Moved { report: MoveReport, next: PieceColor },
    /// A move removed a king and ended the game
    GameEnded { report: MoveReport, outcome: GameOutcome },
}

impl GameEvent {
    /// Whether the board or selection changed and should be redrawn
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, GameEvent::Ignored)
    }
}

/// Status line shown to the players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    PieceSelected(PieceType),
    ToMove(PieceColor),
    Checkmate { winner: PieceColor },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::PieceSelected(kind) => write!(f, "Selected piece: {}", kind.name()),
            Status::ToMove(color) => write!(f, "{} to move", color.name()),
            Status::Checkmate { winner } => write!(f, "Checkmate! {} wins", winner.name()),
        }
    }
}
