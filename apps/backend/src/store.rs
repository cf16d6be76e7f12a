//! In-memory game registry.
//!
//! `GameStore` owns every `Game` and allocates ids. Lookups go through a
//! `DashMap` so unrelated games never contend; each game sits behind its own
//! `RwLock`, and all mutation (join, move, resolution) happens under that
//! write lock. Readers clone or project under the read lock, so they see a
//! game either before or after an update, never halfway.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::game::GAME_NOT_FOUND;
use crate::domain::{validate_player_name, Game, GameId};
use crate::errors::domain::{DomainError, NotFoundKind};

type GameCell = Arc<RwLock<Game>>;

pub struct GameStore {
    games: DashMap<GameId, GameCell>,
    next_id: AtomicU64,
}

impl GameStore {
    /// Create an empty store; the first game gets id 1.
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a game seating `player_name` and return its id.
    ///
    /// The name is validated before an id is taken, so a rejected request
    /// leaves no trace in the store.
    pub fn create_game(&self, player_name: &str) -> Result<GameId, DomainError> {
        validate_player_name(player_name)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = Game::new(id, player_name);
        self.games.insert(id, Arc::new(RwLock::new(game)));
        Ok(id)
    }

    // The DashMap shard guard is released before the game lock is taken.
    fn cell(&self, id: GameId) -> Result<GameCell, DomainError> {
        self.games
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, GAME_NOT_FOUND))
    }

    /// Consistent copy of a game.
    pub fn get(&self, id: GameId) -> Result<Game, DomainError> {
        Ok(self.cell(id)?.read().clone())
    }

    /// Run `f` against a game under its read lock.
    pub fn with_game<R>(&self, id: GameId, f: impl FnOnce(&Game) -> R) -> Result<R, DomainError> {
        let cell = self.cell(id)?;
        let game = cell.read();
        Ok(f(&game))
    }

    /// Run `f` against a game under its write lock.
    pub fn with_game_mut<R>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let cell = self.cell(id)?;
        let mut game = cell.write();
        f(&mut game)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("games", &self.games.len())
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish()
    }
}
