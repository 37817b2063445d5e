//! Captured pieces tracking
//!
//! Each list belongs to the player who made the captures: `white` holds the
//! pieces White has taken, `black` the pieces Black has taken. Lists are
//! append-only and kept in capture order. Rules logic never reads them.
//!
//! # Material Values
//!
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0
//!
//! Positive advantage means White is ahead, negative means Black is ahead.

use serde::Serialize;

use crate::game::pieces::{Piece, PieceColor, PieceType};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    /// Pieces captured by White
    white: Vec<Piece>,
    /// Pieces captured by Black
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// Record that `mover` removed `piece` from the board
    pub fn add_capture(&mut self, mover: PieceColor, piece: Piece) {
        match mover {
            PieceColor::White => self.white.push(piece),
            PieceColor::Black => self.black.push(piece),
        }
    }

    /// Pieces captured by `color`, oldest first
    pub fn by(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Material difference in pawn units
    pub fn material_advantage(&self) -> i32 {
        let score = |pieces: &[Piece]| -> i32 { pieces.iter().map(|p| piece_value(p.piece_type)).sum() };
        score(&self.white) - score(&self.black)
    }
}

fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 0,
    }
}
