use std::sync::Arc;

use crate::state::app_state::AppState;
use crate::store::GameStore;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    store: Option<Arc<GameStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing store instead of a fresh one.
    pub fn with_store(mut self, store: Arc<GameStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.store.unwrap_or_default())
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
