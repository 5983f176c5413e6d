use std::sync::Arc;

use crate::store::UserStore;

/// Shared per-process state handed to every request handler. The store is
/// the only mutable resource; it lives from process start to termination.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    /// State for a fresh process start: a store seeded with the test
    /// account.
    pub fn init() -> Self {
        Self {
            store: Arc::new(UserStore::seeded()),
        }
    }
}
