//! Selection of a piece and its cached candidate moves

use serde::Serialize;

use crate::game::error::GameResult;
use crate::game::pieces::Piece;
use crate::game::rules::{candidate_moves, CandidateMove, Position};
use crate::game::types::Square;

/// The currently selected piece and where it may go
///
/// Only exists between an activation and the following move or deselection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    origin: Square,
    piece: Piece,
    possible_moves: Vec<Square>,
}

impl Selection {
    /// Select `piece` on `origin` and compute its candidates
    pub(crate) fn compute(position: &Position, origin: Square, piece: Piece) -> GameResult<Self> {
        Ok(Selection {
            origin,
            piece,
            possible_moves: candidate_moves(position, origin)?,
        })
    }

    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn possible_moves(&self) -> &[Square] {
        &self.possible_moves
    }

    pub fn is_candidate(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }

    /// A move to `square`, if it is one of the cached candidates
    pub(crate) fn target(&self, square: Square) -> Option<CandidateMove> {
        CandidateMove::from_candidates(self.origin, square, &self.possible_moves)
    }
}
