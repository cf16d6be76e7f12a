//! Game coordination service: store lookups plus engine calls.

use tracing::{debug, info};

use crate::domain::game::GAME_FULL_OR_NOT_FOUND;
use crate::domain::{Game, GameId, GameView, MoveOutcome, Seat, Winner};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::store::GameStore;

/// Game domain service.
///
/// Borrowed per request from `AppState`; holds no state of its own.
pub struct GameService<'a> {
    store: &'a GameStore,
}

impl<'a> GameService<'a> {
    pub fn new(store: &'a GameStore) -> Self {
        Self { store }
    }

    /// Create a game with `player_name` in seat 0.
    pub fn create_game(&self, player_name: &str) -> Result<GameId, DomainError> {
        let game_id = self.store.create_game(player_name)?;
        info!(game_id, player = %player_name, "game created");
        Ok(game_id)
    }

    /// Seat `player_name` as the opponent.
    ///
    /// A missing game and a full game are reported the same way.
    pub fn join_game(&self, game_id: GameId, player_name: &str) -> Result<Seat, DomainError> {
        let seat = self
            .store
            .with_game_mut(game_id, |game| game.join(player_name))
            .map_err(|err| match err {
                DomainError::NotFound(NotFoundKind::Game, _) => {
                    DomainError::game_full_or_not_found(GAME_FULL_OR_NOT_FOUND)
                }
                other => other,
            })?;
        info!(game_id, player = %player_name, seat, "player joined");
        Ok(seat)
    }

    /// Record a move; resolves the game in the same critical section when it
    /// completes the pair.
    pub fn submit_move(
        &self,
        game_id: GameId,
        player_name: &str,
        raw_move: &str,
    ) -> Result<MoveOutcome, DomainError> {
        let (outcome, winner) = self.store.with_game_mut(game_id, |game| {
            let outcome = game.submit_move(player_name, raw_move)?;
            Ok((outcome, game.winner()))
        })?;

        match (outcome, winner) {
            (MoveOutcome::Resolved, Winner::Player(seat)) => {
                info!(game_id, seat, "game resolved with a winner")
            }
            (MoveOutcome::Resolved, _) => info!(game_id, "game resolved as a tie"),
            (MoveOutcome::Waiting, _) => {
                debug!(game_id, player = %player_name, "move recorded, waiting for opponent")
            }
        }
        Ok(outcome)
    }

    /// Read-only projection of a game.
    pub fn game_view(&self, game_id: GameId) -> Result<GameView, DomainError> {
        self.store.with_game(game_id, Game::query)
    }

    /// Snapshot of the full game record.
    pub fn get_game(&self, game_id: GameId) -> Result<Game, DomainError> {
        self.store.get(game_id)
    }
}
