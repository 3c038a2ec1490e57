//! Application state for the Folio site server.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::db::ContentStore;
use crate::error::AppResult;
use crate::services::{ContactService, ContentService};
use crate::template::TemplateRenderer;

/// Shared application state.
///
/// Cloned into every handler; all members are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Content backend
    pub store: Arc<dyn ContentStore>,

    /// Listings, detail pages and the home page
    pub content: ContentService,

    /// Contact form submissions
    pub contact: ContactService,

    /// Page templates
    pub templates: Arc<TemplateRenderer>,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Fails if the embedded templates do not compile.
    pub fn new(store: Arc<dyn ContentStore>, config: AppConfig) -> AppResult<Self> {
        let content = ContentService::new(
            store.clone(),
            config.page_size,
            config.detail_require_active,
        );
        let contact = ContactService::new(store.clone());

        Ok(Self {
            store,
            content,
            contact,
            templates: Arc::new(TemplateRenderer::new()?),
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_new_state() {
        let state = AppState::new(Arc::new(MemoryStore::default()), AppConfig::default()).unwrap();
        assert_eq!(state.store.backend(), "memory");
        assert_eq!(state.config.page_size, 10);
        assert!(state.uptime_seconds() < 5);
    }
}
