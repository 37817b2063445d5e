//! Rules engine for a two-player game on an 8x8 board
//!
//! The engine keeps the board, enforces turn order, computes candidate
//! destinations for a selected piece, executes moves and captures, and ends
//! the game when a king has been taken off the board.
//!
//! ```rust
//! use chess_rules::{new_game, GameEvent, Square};
//!
//! let mut game = new_game();
//! let e2: Square = "e2".parse().unwrap();
//! let e3: Square = "e3".parse().unwrap();
//!
//! assert!(matches!(game.activate_square(e2), Ok(GameEvent::Selected { .. })));
//! assert!(matches!(game.activate_square(e3), Ok(GameEvent::Moved { .. })));
//! ```

pub mod core;
pub mod game;
pub mod ui;

pub use game::{
    new_game, GameError, GameEvent, GamePhase, GameResult, GameState, MoveReport, Piece,
    PieceColor, PieceType, SharedGame, Square, Status,
};
