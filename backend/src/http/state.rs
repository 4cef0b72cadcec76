//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::TaskRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task store backing `/api/data`
    pub repository: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }
}
