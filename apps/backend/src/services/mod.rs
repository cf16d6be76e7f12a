//! Service layer: coordinates the store and the game engine.

pub mod games;

pub use games::GameService;
