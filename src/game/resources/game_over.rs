//! Game outcome
//!
//! The game ends only when a king has been removed from the board. There is
//! no check, stalemate or draw detection.
//!
//! ```text
//! InProgress → WhiteWins / BlackWins
//! ```

use serde::Serialize;

use crate::game::pieces::PieceColor;
use crate::game::rules::Position;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
}

impl GameOutcome {
    /// Scan the board for both kings
    ///
    /// If both kings are gone, the missing White king decides.
    pub fn from_position(position: &Position) -> Self {
        if !position.has_king(PieceColor::White) {
            GameOutcome::BlackWins
        } else if !position.has_king(PieceColor::Black) {
            GameOutcome::WhiteWins
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::WhiteWins => Some(PieceColor::White),
            GameOutcome::BlackWins => Some(PieceColor::Black),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Game in progress",
            GameOutcome::WhiteWins => "Checkmate! White wins",
            GameOutcome::BlackWins => "Checkmate! Black wins",
        }
    }
}
