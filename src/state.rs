use crate::db::Database;
use crate::store::SharedStore;

/// Everything a request handler needs.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub db: Database,
}

impl AppState {
    pub fn new(store: SharedStore, db: Database) -> Self {
        Self { store, db }
    }
}
