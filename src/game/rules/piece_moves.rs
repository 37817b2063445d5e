//! Chess piece movement rules
//!
//! Contains the rules for how each piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! Candidates are produced in a fixed order (direction table order, nearest
//! square first) so that callers highlighting them get stable output.

use super::position::Position;
use crate::game::error::GameResult;
use crate::game::pieces::{Piece, PieceType};
use crate::game::types::Square;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Get all candidate destinations for the piece on `origin`
///
/// Returns an empty list for an empty square and `OutOfBounds` for an
/// off-board origin.
pub fn candidate_moves(position: &Position, origin: Square) -> GameResult<Vec<Square>> {
    let Some(piece) = position.piece_at(origin)? else {
        return Ok(Vec::new());
    };

    let moves = match piece.piece_type {
        PieceType::Pawn => pawn_moves(position, origin, piece),
        PieceType::Knight => step_moves(position, origin, piece, &KNIGHT_OFFSETS),
        PieceType::Bishop => sliding_moves(position, origin, piece, &DIAGONAL, None),
        PieceType::Rook => sliding_moves(position, origin, piece, &ORTHOGONAL, None),
        PieceType::Queen => sliding_moves(position, origin, piece, &ALL_DIRECTIONS, None),
        PieceType::King => sliding_moves(position, origin, piece, &ALL_DIRECTIONS, Some(1)),
    };

    Ok(moves)
}

/// Whether `to` is among the candidates of the piece on `from`
pub fn is_valid_move(position: &Position, from: Square, to: Square) -> GameResult<bool> {
    Ok(candidate_moves(position, from)?.contains(&to))
}

fn pawn_moves(position: &Position, from: Square, pawn: Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    let direction = pawn.color.forward();

    // Forward move, never a capture
    if let Some(ahead) = from.offset(direction, 0) {
        if position.get(ahead).is_none() {
            moves.push(ahead);
        }
    }

    // Capture diagonally, only onto an opposing piece
    for df in [-1, 1] {
        if let Some(target) = from.offset(direction, df) {
            if matches!(position.get(target), Some(other) if other.is_opponent_of(pawn)) {
                moves.push(target);
            }
        }
    }

    moves
}

fn step_moves(position: &Position, from: Square, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| match position.get(to) {
            None => true,
            Some(other) => other.is_opponent_of(piece),
        })
        .collect()
}

/// Walk outward along each direction, stopping at the board edge, at the
/// first occupied square, or after `max_steps`
fn sliding_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    max_steps: Option<usize>,
) -> Vec<Square> {
    let mut moves = Vec::new();
    let limit = max_steps.unwrap_or(usize::MAX);

    for &(dr, df) in directions {
        let mut current = from;
        let mut steps = 0;

        while steps < limit {
            let Some(next) = current.offset(dr, df) else {
                break;
            };
            steps += 1;

            match position.get(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.is_opponent_of(piece) {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}
