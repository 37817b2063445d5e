//! Turn tracking
//!
//! The single source of truth for whose turn it is, plus a move counter for
//! display. White moves first.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use serde::Serialize;

use crate::game::pieces::PieceColor;

/// Tracks whose turn it currently is and the current move number
///
/// The move number starts at 1 and increments only when Black hands the turn
/// back to White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other player's turn
    pub fn switch(&mut self) {
        if self.color == PieceColor::Black {
            self.move_number += 1;
        }
        self.color = self.color.opposite();
    }
}
