//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Include error traces in formatter responses. Off in production.
    pub expose_error_traces: bool,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, expose_error_traces: bool) -> Self {
        Self {
            shortener,
            expose_error_traces,
        }
    }
}
