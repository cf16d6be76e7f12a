pub mod game_id;
pub mod validated_json;

pub use game_id::{resolve_game_id, GameIdParam};
pub use validated_json::ValidatedJson;
