//! Thread-safe handle to a [`Game`].
//!
//! Every command takes the lock once, so validation and mutation happen in a
//! single critical section and a second submitter sees the updated turn.

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::game::{Action, Game, GameError};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Game>>,
}

impl SharedSession {
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        Ok(Self::from_game(Game::new(config)?))
    }

    pub fn from_game(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Game>, SessionError> {
        self.inner.lock().map_err(|_| SessionError::Poisoned)
    }

    /// Submit an action for `player`. Out-of-turn submissions are rejected, never queued.
    pub fn submit(&self, player: usize, action: Action) -> Result<(), SessionError> {
        let mut game = self.lock()?;
        game.act(player, action)?;
        Ok(())
    }

    pub fn drain_events(&self) -> Result<Vec<GameEvent>, SessionError> {
        Ok(self.lock()?.drain_events())
    }

    /// Run `f` against a consistent view of the game.
    pub fn with_game<T>(&self, f: impl FnOnce(&Game) -> T) -> Result<T, SessionError> {
        let game = self.lock()?;
        Ok(f(&game))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<Game, SessionError> {
        self.with_game(Game::clone)
    }
}
