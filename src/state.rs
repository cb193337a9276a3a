//! Shared application state for all routes.

use crate::dal::TestRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup and shared by every request.
    pub repo: Arc<dyn TestRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TestRepository>) -> Self {
        Self { repo }
    }
}
