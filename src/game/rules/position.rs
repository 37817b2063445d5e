//! Board position: an 8x8 grid of optional pieces

use crate::game::error::GameResult;
use crate::game::pieces::{Piece, PieceColor, PieceType};
use crate::game::types::Square;

/// Standard back-rank ordering, file a to file h
pub const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the state of the board
///
/// Every square holds at most one piece by construction. Nothing else is
/// enforced: a position may contain any number of kings of either color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl Position {
    /// A board with no pieces
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement
    ///
    /// Black occupies rank indices 0 and 1, White rank indices 6 and 7.
    pub fn starting() -> Self {
        let mut squares = [[None; 8]; 8];
        for (file, &piece_type) in BACK_ROW.iter().enumerate() {
            squares[0][file] = Some(Piece::black(piece_type));
            squares[1][file] = Some(Piece::black(PieceType::Pawn));
            squares[6][file] = Some(Piece::white(PieceType::Pawn));
            squares[7][file] = Some(Piece::white(piece_type));
        }
        Position { squares }
    }

    /// Build a position from a list of placements, later entries win
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> GameResult<Self> {
        let mut position = Position::empty();
        for &(square, piece) in pieces {
            position.set(square, Some(piece))?;
        }
        Ok(position)
    }

    /// Return the piece at a square, or `None` if empty
    pub fn piece_at(&self, square: Square) -> GameResult<Option<Piece>> {
        let (rank, file) = square.validate()?.index();
        Ok(self.squares[rank][file])
    }

    /// Overwrite a square
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> GameResult<()> {
        let (rank, file) = square.validate()?.index();
        self.squares[rank][file] = piece;
        Ok(())
    }

    /// Lookup for squares already known to be on the board
    pub(crate) fn get(&self, square: Square) -> Option<Piece> {
        let (rank, file) = square.index();
        self.squares[rank][file]
    }

    /// Remove and return the piece on a square known to be on the board
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        let (rank, file) = square.index();
        self.squares[rank][file].take()
    }

    /// Place a piece on a square known to be on the board, returning the previous occupant
    pub(crate) fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let (rank, file) = square.index();
        self.squares[rank][file].replace(piece)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        square.is_on_board() && self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        if !square.is_on_board() {
            return None;
        }
        self.get(square).map(|piece| piece.color)
    }

    /// Occupied squares in rank-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Whether at least one king of `color` is on the board
    pub fn has_king(&self, color: PieceColor) -> bool {
        self.pieces()
            .any(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
    }

    /// Number of pieces of `color` on the board
    pub fn count(&self, color: PieceColor) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}
