//! Domain layer: the rock/paper/scissors state machine and its value types.

pub mod game;
pub mod moves;


// Re-exports for ergonomics
pub use game::{
    resolve_pair, validate_player_name, Game, GameId, GamePhase, GameView, MoveOutcome, Player,
    Seat, Winner, MAX_PLAYERS,
};
pub use moves::{Move, ParseMoveError};
