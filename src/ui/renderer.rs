//! Plain-text board renderer
//!
//! Rank 8 (index 0, Black's back rank) is printed first so White sits at the
//! bottom. Each cell is three characters wide:
//!
//! - `[♙]` selected square
//! - ` * ` empty candidate square
//! - `*♜*` occupied candidate square (a capture)

use std::fmt::Write as _;

use crate::core::{GameSettings, GlyphStyle};
use crate::game::{GameState, Piece, PieceColor, PieceType, Square};

/// Simple text renderer for the board.
pub struct BoardRenderer;

impl BoardRenderer {
    /// Board, captured lists (if enabled) and the status line
    pub fn render(state: &GameState, settings: &GameSettings) -> String {
        let mut output = Self::render_board(state, settings);

        if settings.show_captured {
            for color in [PieceColor::White, PieceColor::Black] {
                let _ = writeln!(
                    output,
                    "{} captured: {}",
                    color.name(),
                    Self::render_pieces(state.captured_by(color), settings.glyph_style)
                );
            }
        }

        let _ = writeln!(output, "{}", state.status());
        output
    }

    /// Only the 8x8 grid with coordinates
    pub fn render_board(state: &GameState, settings: &GameSettings) -> String {
        let selected = state.selection().map(|selection| selection.origin());
        let candidates: &[Square] = if settings.show_hints {
            state.candidates()
        } else {
            &[]
        };

        let mut output = String::new();
        for square in Square::all() {
            if square.file == 0 {
                let _ = write!(output, "{} ", square.rank_char());
            }

            let piece = state.position().piece_at(square).ok().flatten();
            let symbol = piece.map_or('.', |p| glyph(p, settings.glyph_style));

            let cell = if selected == Some(square) {
                format!("[{symbol}]")
            } else if candidates.contains(&square) {
                match piece {
                    Some(_) => format!("*{symbol}*"),
                    None => " * ".to_string(),
                }
            } else {
                format!(" {symbol} ")
            };
            output.push_str(&cell);

            if square.file == 7 {
                output.push('\n');
            }
        }

        output.push_str("  ");
        for file in 'a'..='h' {
            let _ = write!(output, " {file} ");
        }
        output.push('\n');
        output
    }

    /// Space-separated glyphs, `-` for an empty list
    pub fn render_pieces(pieces: &[Piece], style: GlyphStyle) -> String {
        if pieces.is_empty() {
            return "-".to_string();
        }
        pieces
            .iter()
            .map(|&p| glyph(p, style).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Character used to draw a piece
pub fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Unicode => match (piece.color, piece.piece_type) {
            (PieceColor::White, PieceType::King) => '♔',
            (PieceColor::White, PieceType::Queen) => '♕',
            (PieceColor::White, PieceType::Rook) => '♖',
            (PieceColor::White, PieceType::Bishop) => '♗',
            (PieceColor::White, PieceType::Knight) => '♘',
            (PieceColor::White, PieceType::Pawn) => '♙',
            (PieceColor::Black, PieceType::King) => '♚',
            (PieceColor::Black, PieceType::Queen) => '♛',
            (PieceColor::Black, PieceType::Rook) => '♜',
            (PieceColor::Black, PieceType::Bishop) => '♝',
            (PieceColor::Black, PieceType::Knight) => '♞',
            (PieceColor::Black, PieceType::Pawn) => '♟',
        },
        GlyphStyle::Ascii => {
            let letter = match piece.piece_type {
                PieceType::King => 'K',
                PieceType::Queen => 'Q',
                PieceType::Rook => 'R',
                PieceType::Bishop => 'B',
                PieceType::Knight => 'N',
                PieceType::Pawn => 'P',
            };
            match piece.color {
                PieceColor::White => letter,
                PieceColor::Black => letter.to_ascii_lowercase(),
            }
        }
    }
}
