//! Game id binding for `/api/games/{id}/...` requests.
//!
//! Clients send the id in the JSON body (`{"id": 1}` or `{"id": "1"}`);
//! the path segment is the fallback when the body has none.

use serde::Deserialize;

use crate::domain::GameId;

/// Game id as it appears in a request body: a JSON number or numeric string.
///
/// Any other JSON value (floats, out-of-range integers, objects) still
/// deserializes, so the body parses and the id simply names no game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GameIdParam {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl GameIdParam {
    /// Positive integer ids only; anything else names no game.
    pub fn to_game_id(&self) -> Option<GameId> {
        let id = match self {
            GameIdParam::Number(n) => u64::try_from(*n).ok(),
            GameIdParam::Text(s) => parse_id(s),
            GameIdParam::Other(_) => None,
        };
        id.filter(|id| *id > 0)
    }
}

fn parse_id(raw: &str) -> Option<GameId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Body id wins when present (even if it names no game); otherwise the path.
pub fn resolve_game_id(body_id: Option<&GameIdParam>, path_id: &str) -> Option<GameId> {
    match body_id {
        Some(param) => param.to_game_id(),
        None => parse_id(path_id).filter(|id| *id > 0),
    }
}
