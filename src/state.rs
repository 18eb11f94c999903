//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DynLinkService, LinkService};
use crate::domain::repositories::LinkRepository;

/// State cloned into each request via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    /// Public prefix for generated short URLs; derived from `Host` when `None`.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    /// Builds the state around a store chosen at startup.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_url: base_url.map(Arc::from),
        }
    }
}
