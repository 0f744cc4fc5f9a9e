#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use link_shortener::application::CacheAsideRepository;
use link_shortener::application::services::{LinkService, SlugPolicy};
use link_shortener::domain::entities::Link;
use link_shortener::domain::repositories::LinkStore;
use link_shortener::infrastructure::cache::NullLinkCache;
use link_shortener::infrastructure::persistence::MemoryLinkStore;
use link_shortener::routes::api_router;
use link_shortener::state::{AppLinkService, AppState};
use std::sync::Arc;

/// Link service over an in-memory store and a disabled cache.
pub fn create_test_service() -> (AppLinkService, Arc<MemoryLinkStore>) {
    create_test_service_with_cache(Arc::new(NullLinkCache::new()))
}

pub fn create_test_service_with_cache(
    cache: Arc<dyn LinkStore>,
) -> (AppLinkService, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let repository = CacheAsideRepository::new(store.clone(), cache);
    let service = LinkService::new(Arc::new(repository), SlugPolicy::default());

    (service, store)
}

pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    let (service, store) = create_test_service();
    (AppState::new(Arc::new(service)), store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(api_router(state)).unwrap();
    (server, store)
}

/// Stores a link directly, bypassing slug allocation.
pub async fn create_test_link(store: &MemoryLinkStore, slug: &str, url: &str) -> Link {
    store
        .insert(&Link::new(slug, url, Utc::now()))
        .await
        .unwrap()
}
