use std::sync::Arc;

use crate::account::Database;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    /// Account and ledger store handle, constructed in `main`
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
