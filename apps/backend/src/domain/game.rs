//! Per-game state machine.
//!
//! A game moves `WaitingForOpponent` → `AwaitingMoves` → `Resolved` and never
//! leaves `Resolved`. Every operation here is synchronous and assumes the
//! caller holds exclusive access (see `crate::store`), which is what makes
//! "record move, then resolve if both moves are in" a single atomic step.

use serde::Serialize;

use crate::domain::moves::Move;
use crate::errors::domain::{DomainError, NotFoundKind};

pub type GameId = u64;
/// Index into `Game::players`, i.e. join order.
pub type Seat = usize;

pub const MAX_PLAYERS: usize = 2;

pub(crate) const MISSING_NAME: &str = "Missing player name in request body.";
pub(crate) const GAME_NOT_FOUND: &str = "Game not found.";
pub(crate) const GAME_FULL_OR_NOT_FOUND: &str = "Game not found or already full.";
pub(crate) const PLAYER_NOT_FOUND: &str = "Player not found in game.";
pub(crate) const INVALID_MOVE: &str = "Invalid move.";
pub(crate) const ALREADY_RESOLVED: &str = "Game already resolved.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "move")]
    pub choice: Option<Move>,
}

impl Player {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: None,
        }
    }
}

/// Outcome slot of a game. `Tie` is a resolved outcome, unlike `Unresolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Unresolved,
    Tie,
    Player(Seat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    WaitingForOpponent,
    AwaitingMoves,
    Resolved,
}

/// Result of a successful move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Recorded; opponent missing or has not moved yet.
    Waiting,
    /// Recorded, and this move decided the game.
    Resolved,
}

/// Read-only projection returned by `Game::query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameView {
    WaitingForOpponent,
    MovesPending,
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    players: Vec<Player>,
    winner: Winner,
}

/// Player names must be non-empty; no trimming or uniqueness rules apply.
pub fn validate_player_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::invalid_input(MISSING_NAME));
    }
    Ok(())
}

/// Decide a pair of moves, `first` being seat 0.
pub fn resolve_pair(first: Move, second: Move) -> Winner {
    if first == second {
        Winner::Tie
    } else if first.beats(second) {
        Winner::Player(0)
    } else {
        Winner::Player(1)
    }
}

impl Game {
    /// Create a game seating its creator. The name must already have passed
    /// `validate_player_name`.
    pub(crate) fn new(id: GameId, creator: impl Into<String>) -> Self {
        let mut players = Vec::with_capacity(MAX_PLAYERS);
        players.push(Player::new(creator));
        Self {
            id,
            players,
            winner: Winner::Unresolved,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn winning_player(&self) -> Option<&Player> {
        match self.winner {
            Winner::Player(seat) => self.players.get(seat),
            Winner::Unresolved | Winner::Tie => None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.players.len() < MAX_PLAYERS {
            GamePhase::WaitingForOpponent
        } else if self.winner == Winner::Unresolved {
            GamePhase::AwaitingMoves
        } else {
            GamePhase::Resolved
        }
    }

    fn all_moves_in(&self) -> bool {
        self.players.len() == MAX_PLAYERS && self.players.iter().all(|p| p.choice.is_some())
    }

    /// Seat a second player. Duplicate names are accepted.
    ///
    /// A full game is reported before the name is looked at, so every join
    /// against a full game is `GameFullOrNotFound`.
    pub fn join(&mut self, name: &str) -> Result<Seat, DomainError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::game_full_or_not_found(GAME_FULL_OR_NOT_FOUND));
        }
        validate_player_name(name)?;
        self.players.push(Player::new(name));
        Ok(self.players.len() - 1)
    }

    /// Record `raw_move` for the first player named `name`.
    ///
    /// Checks run player first, then move text, so an unknown player always
    /// reports `PlayerNotFound` whatever the move says. A move may be
    /// replaced freely until the game resolves.
    pub fn submit_move(&mut self, name: &str, raw_move: &str) -> Result<MoveOutcome, DomainError> {
        let seat = self
            .players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, PLAYER_NOT_FOUND))?;

        let choice: Move = raw_move
            .parse()
            .map_err(|_| DomainError::invalid_move(INVALID_MOVE))?;

        if self.winner != Winner::Unresolved {
            return Err(DomainError::already_resolved(ALREADY_RESOLVED));
        }

        self.players[seat].choice = Some(choice);

        if self.all_moves_in() {
            self.resolve();
            Ok(MoveOutcome::Resolved)
        } else {
            Ok(MoveOutcome::Waiting)
        }
    }

    fn resolve(&mut self) {
        debug_assert_eq!(self.winner, Winner::Unresolved);
        if let [Player { choice: Some(first), .. }, Player { choice: Some(second), .. }] =
            self.players.as_slice()
        {
            self.winner = resolve_pair(*first, *second);
        }
    }

    pub fn query(&self) -> GameView {
        if self.players.len() < MAX_PLAYERS {
            return GameView::WaitingForOpponent;
        }
        if !self.all_moves_in() {
            return GameView::MovesPending;
        }
        match self.winning_player() {
            Some(player) => GameView::Winner(player.clone()),
            None => GameView::Tie,
        }
    }
}
