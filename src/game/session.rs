//! Thread-safe handle around a [`GameState`]
//!
//! The state machine itself is single-threaded. When activations arrive from
//! several threads (network peers, a UI thread and a bot), they go through a
//! `SharedGame` so that each transition runs under the lock, one at a time.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::game::error::GameResult;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::Square;

#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run one activation atomically
    pub fn activate(&self, square: Square) -> GameResult<GameEvent> {
        self.inner.lock().activate_square(square)
    }

    /// Replace the game with a fresh one
    pub fn restart(&self) {
        *self.inner.lock() = GameState::new();
        info!("Started a new game");
    }

    /// Copy of the current state, for rendering outside the lock
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().clone()
    }

    /// Read the state under the lock without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.inner.lock())
    }
}
