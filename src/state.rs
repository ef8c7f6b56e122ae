//! Shared, read-only application state.

use std::sync::Arc;

use crate::config::Config;

/// State handed to every handler through axum's `State` extractor.
///
/// Built once at startup; requests only ever read from it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// The configured connection string, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.config
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}
