//! Error codes for the game backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the game backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Required field missing or empty
    InvalidInput,
    /// Move outside rock/paper/scissors
    InvalidMove,
    /// Body could not be read or parsed
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Join target missing or already full
    GameFullOrNotFound,
    /// Player not found in game
    PlayerNotFound,

    // Game State
    /// Game already has a winner or ended in a tie
    GameAlreadyResolved,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 9] = [
        Self::InvalidInput,
        Self::InvalidMove,
        Self::BadRequest,
        Self::GameNotFound,
        Self::GameFullOrNotFound,
        Self::PlayerNotFound,
        Self::GameAlreadyResolved,
        Self::Internal,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidMove => "INVALID_MOVE",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::GameFullOrNotFound => "GAME_FULL_OR_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::GameAlreadyResolved => "GAME_ALREADY_RESOLVED",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
