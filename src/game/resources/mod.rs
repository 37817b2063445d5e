//! Game resources - state owned by a [`GameState`](crate::game::GameState)
//!
//! # Resource Categories
//!
//! - [`CurrentTurn`] - Whose turn it is and the move number
//! - [`Selection`] - Currently selected piece and its candidate moves
//! - [`CapturedPieces`] - Per-player capture lists and material balance
//! - [`GameOutcome`] - In progress, or which side won

pub mod captured;
pub mod game_over;
pub mod selection;
pub mod turn;


pub use captured::*;
pub use game_over::*;
pub use selection::*;
pub use turn::*;
