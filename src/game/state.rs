//! Game state machine
//!
//! [`GameState`] owns the board, the active player, the selection and the
//! capture lists, and reacts to square activations coming from whatever
//! front end is driving it.
//!
//! # Phases
//!
//! ```text
//! AwaitingSelection ──own piece──▶ PieceSelected ──candidate──▶ AwaitingSelection (turn flips)
//!        ▲                              │   │
//!        └──────────other square────────┘   └──candidate removes a king──▶ GameOver
//! ```
//!
//! Clicking another piece of the active player while one is selected
//! reselects. `GameOver` is terminal: activations are accepted and ignored.
//!
//! A new game is a new `GameState`; there is no in-place reset.

use serde::Serialize;
use tracing::{debug, info};

use crate::game::error::GameResult;
use crate::game::events::{GameEvent, MoveReport, Status};
use crate::game::pieces::{Piece, PieceColor};
use crate::game::resources::{CapturedPieces, CurrentTurn, GameOutcome, Selection};
use crate::game::rules::{apply_move, CandidateMove, Position};
use crate::game::types::Square;

/// Where the game currently stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    AwaitingSelection,
    PieceSelected(Selection),
    GameOver(GameOutcome),
}

#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    turn: CurrentTurn,
    phase: GamePhase,
    captured: CapturedPieces,
}

/// Start a game from the standard arrangement, White to move
pub fn new_game() -> GameState {
    GameState::new()
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState::from_position(Position::starting(), PieceColor::White)
    }

    /// Start from an arbitrary position
    ///
    /// The king scan only runs after a move, so a position that already lacks
    /// a king stays in progress until someone moves.
    pub fn from_position(position: Position, to_move: PieceColor) -> Self {
        GameState {
            position,
            turn: CurrentTurn {
                color: to_move,
                move_number: 1,
            },
            phase: GamePhase::AwaitingSelection,
            captured: CapturedPieces::default(),
        }
    }

    /// React to the player activating `square`
    ///
    /// Off-board squares are rejected with `OutOfBounds` and change nothing.
    /// Activating the selected square again drops the selection instead of
    /// reselecting the same piece and recomputing its candidates; only a
    /// different own piece counts as a reselection.
    pub fn activate_square(&mut self, square: Square) -> GameResult<GameEvent> {
        square.validate()?;

        let selected = match &self.phase {
            GamePhase::GameOver(outcome) => {
                debug!("Ignoring {} after game end ({:?})", square, outcome);
                return Ok(GameEvent::Ignored);
            }
            GamePhase::AwaitingSelection => None,
            GamePhase::PieceSelected(selection) => Some((
                selection.origin(),
                selection.piece(),
                selection.target(square),
            )),
        };

        let event = match selected {
            Some((_, piece, Some(mv))) => self.execute(piece, mv),
            Some((origin, _, None)) => match self.own_piece_at(square) {
                Some(piece) if square != origin => self.select(square, piece)?,
                _ => {
                    debug!("Deselected {}", origin);
                    self.phase = GamePhase::AwaitingSelection;
                    GameEvent::Deselected
                }
            },
            None => match self.own_piece_at(square) {
                Some(piece) => self.select(square, piece)?,
                None => {
                    debug!("No {} piece on {}", self.turn.color.name(), square);
                    GameEvent::Ignored
                }
            },
        };

        Ok(event)
    }

    fn own_piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .get(square)
            .filter(|piece| piece.color == self.turn.color)
    }

    fn select(&mut self, square: Square, piece: Piece) -> GameResult<GameEvent> {
        let selection = Selection::compute(&self.position, square, piece)?;
        let candidates = selection.possible_moves().len();
        debug!(
            "Selected {:?} on {} with {} candidate(s)",
            piece.piece_type, square, candidates
        );
        self.phase = GamePhase::PieceSelected(selection);
        Ok(GameEvent::Selected {
            origin: square,
            piece,
            candidates,
        })
    }

    fn execute(&mut self, piece: Piece, mv: CandidateMove) -> GameEvent {
        let mover = self.turn.color;
        let captured = apply_move(&mut self.position, mv);
        info!("Moved {:?} from {} to {}", piece.piece_type, mv.from(), mv.to());

        if let Some(taken) = captured {
            info!("{} captured {:?}", mover.name(), taken.piece_type);
            self.captured.add_capture(mover, taken);
        }

        let report = MoveReport {
            piece,
            from: mv.from(),
            to: mv.to(),
            captured,
        };

        match GameOutcome::from_position(&self.position) {
            GameOutcome::InProgress => {
                self.turn.switch();
                self.phase = GamePhase::AwaitingSelection;
                info!("Turn: {:?} - Move #{}", self.turn.color, self.turn.move_number);
                GameEvent::Moved {
                    report,
                    next: self.turn.color,
                }
            }
            outcome => {
                info!("Game over: {}", outcome.message());
                self.phase = GamePhase::GameOver(outcome);
                GameEvent::GameEnded { report, outcome }
            }
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn active_player(&self) -> PieceColor {
        self.turn.color
    }

    pub fn turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            GamePhase::PieceSelected(selection) => Some(selection),
            _ => None,
        }
    }

    /// Candidate squares of the current selection, empty if none
    pub fn candidates(&self) -> &[Square] {
        self.selection()
            .map(Selection::possible_moves)
            .unwrap_or_default()
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Pieces captured by `color`
    pub fn captured_by(&self, color: PieceColor) -> &[Piece] {
        self.captured.by(color)
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            GamePhase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_game_over()
    }

    pub fn status(&self) -> Status {
        match &self.phase {
            GamePhase::PieceSelected(selection) => Status::PieceSelected(selection.piece().piece_type),
            GamePhase::GameOver(outcome) => match outcome.winner() {
                Some(winner) => Status::Checkmate { winner },
                None => Status::ToMove(self.turn.color),
            },
            GamePhase::AwaitingSelection => Status::ToMove(self.turn.color),
        }
    }
}
