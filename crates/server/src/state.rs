//! Shared application state.

use std::sync::Arc;

use discount_allocator_config::Settings;

/// State shared across request handlers. The engine itself is stateless,
/// so this only carries settings.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
