//! Rules module - Pure game logic
//!
//! Board representation, per-piece candidate generation and move execution,
//! with no knowledge of turns, selection or presentation.
//!
//! # Module Structure
//!
//! - `position` - 8x8 board with bounds-checked access
//! - `piece_moves` - Candidate destinations for each piece type
//! - `executor` - Applies a verified move and reports the capture
//!
//! The rules are deliberately simplified: no castling, en passant, promotion
//! or double pawn step, and moving into check is allowed.

pub mod executor;
pub mod piece_moves;
pub mod position;


pub use executor::{apply_move, CandidateMove};
pub use piece_moves::{candidate_moves, is_valid_move};
pub use position::{Position, BACK_ROW};
