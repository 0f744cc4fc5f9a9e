//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::CacheAsideRepository;
use crate::application::services::LinkService;

/// Link service wired over the cache-aside repository.
pub type AppLinkService = LinkService<CacheAsideRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }
}
