use std::sync::Arc;

use crate::store::GameStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one game registry every worker shares
    store: Arc<GameStore>,
}

impl AppState {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Shared handle to the store, e.g. to inspect it from a test.
    pub fn store_handle(&self) -> Arc<GameStore> {
        Arc::clone(&self.store)
    }
}
