//! Game logic module - rules engine and turn orchestration
//!
//! # Module Organization
//!
//! - `types` - Board coordinates ([`Square`])
//! - `pieces` - Piece kinds and colors
//! - `rules` - Pure logic: position, candidate generation, move execution
//! - `resources` - Turn, selection, captured pieces, outcome
//! - `state` - [`GameState`], the selection/move state machine
//! - `events` - Display-update signals and status
//! - `session` - [`SharedGame`], a lock-serialised handle for multi-threaded callers
//! - `error` - [`GameError`] and [`GameResult`]
//!
//! Control flow: a front end reports a square activation to `GameState`,
//! which either computes candidates for a selection or, when the square is
//! one of the pending candidates, executes the move, records any capture,
//! checks for a missing king and passes the turn.

pub mod error;
pub mod events;
pub mod pieces;
pub mod resources;
pub mod rules;
pub mod session;
pub mod state;
pub mod types;

pub use error::{GameError, GameResult};
pub use events::{GameEvent, MoveReport, Status};
pub use pieces::{Piece, PieceColor, PieceType};
pub use session::SharedGame;
pub use state::{new_game, GamePhase, GameState};
pub use types::Square;
