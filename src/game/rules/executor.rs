//! Move execution
//!
//! The executor never re-checks legality. Instead it only accepts a
//! [`CandidateMove`], and the only ways to build one go through the candidate
//! list: a [`Selection`](crate::game::resources::Selection) handing out one of
//! its cached destinations, or [`CandidateMove::verify`] recomputing them.

use serde::Serialize;

use super::piece_moves::candidate_moves;
use super::position::Position;
use crate::game::error::{GameError, GameResult};
use crate::game::pieces::Piece;
use crate::game::types::Square;

/// An (origin, destination) pair known to be a candidate move
///
/// The token is tied to the position it was verified against; a later change
/// to that position invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateMove {
    from: Square,
    to: Square,
}

impl CandidateMove {
    /// Only for destinations drawn from a freshly computed candidate list
    pub(crate) fn from_candidates(from: Square, to: Square, candidates: &[Square]) -> Option<Self> {
        candidates.contains(&to).then_some(CandidateMove { from, to })
    }

    /// Check `to` against the candidates of the piece on `from`
    pub fn verify(position: &Position, from: Square, to: Square) -> GameResult<Self> {
        to.validate()?;
        if position.piece_at(from)?.is_none() {
            return Err(GameError::EmptySquare { square: from });
        }
        let candidates = candidate_moves(position, from)?;
        CandidateMove::from_candidates(from, to, &candidates)
            .ok_or(GameError::IllegalDestination { from, to })
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }
}

/// Move the piece and return whatever stood on the destination
///
/// `mv` is only meaningful for the position it was checked against. Applying
/// it to a position with an empty origin is a caller bug and panics in debug
/// builds; release builds leave the board untouched.
pub fn apply_move(position: &mut Position, mv: CandidateMove) -> Option<Piece> {
    let piece = position.take(mv.from);
    debug_assert!(
        piece.is_some(),
        "move {} -> {} applied to a position with no piece on {}",
        mv.from,
        mv.to,
        mv.from
    );
    piece.and_then(|piece| position.put(mv.to, piece))
}
