//! Shared state for movie catalog handlers.

use std::sync::Arc;

use marquee_core::MovieCatalog;

use crate::config::Config;

/// Shared application state for all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// The in-memory movie store.
    pub catalog: Arc<MovieCatalog>,
}

impl AppState {
    /// Creates new application state with an explicit catalog.
    #[must_use]
    pub fn with_catalog(config: Config, catalog: Arc<MovieCatalog>) -> Self {
        Self { config, catalog }
    }
}
