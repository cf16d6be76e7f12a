//! Domain-level error type used by the game engine, the store and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`. Each kind stays distinct here
//! even where the HTTP layer collapses several of them onto one status.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which entity a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input missing or empty (e.g. the player name)
    InvalidInput(String),
    /// Unknown game id, or a name that is not seated in the game
    NotFound(NotFoundKind, String),
    /// Join target is missing or already seats two players
    GameFullOrNotFound(String),
    /// Move text outside the three-symbol set
    InvalidMove(String),
    /// Move submitted after the winner was decided
    AlreadyResolved(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidInput(d) => write!(f, "invalid input: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::GameFullOrNotFound(d) => write!(f, "game full or not found: {d}"),
            DomainError::InvalidMove(d) => write!(f, "invalid move: {d}"),
            DomainError::AlreadyResolved(d) => write!(f, "already resolved: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn game_full_or_not_found(detail: impl Into<String>) -> Self {
        Self::GameFullOrNotFound(detail.into())
    }
    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::InvalidMove(detail.into())
    }
    pub fn already_resolved(detail: impl Into<String>) -> Self {
        Self::AlreadyResolved(detail.into())
    }

    /// Human-readable detail without the kind prefix used by `Display`.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::InvalidInput(d)
            | DomainError::NotFound(_, d)
            | DomainError::GameFullOrNotFound(d)
            | DomainError::InvalidMove(d)
            | DomainError::AlreadyResolved(d) => d,
        }
    }
}
