//! Cache-aside composition of a cache adapter and the durable store.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::{LinkRepository, LinkStore};

/// Link repository that reads through a cache and writes to the durable store.
///
/// # Policy
///
/// - **find**: cache first; any cache miss or cache error falls back to the store
/// - **insert**: store first, authoritative; the cache is written only after the
///   store accepted the link, and cache failures are ignored
/// - **delete**: store first; cache invalidation is best-effort
/// - **list**: store only
///
/// The durable store is the single source of truth for existence and
/// uniqueness. Cache failures degrade latency, never correctness.
pub struct CacheAsideRepository {
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn LinkStore>,
}

impl CacheAsideRepository {
    /// Creates a repository over a durable store and a cache.
    pub fn new(store: Arc<dyn LinkStore>, cache: Arc<dyn LinkStore>) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl LinkRepository for CacheAsideRepository {
    async fn find(&self, slug: &str) -> LinkResult<Link> {
        match self.cache.find(slug).await {
            Ok(link) => return Ok(link),
            Err(LinkError::NotFound) => {}
            Err(e) => warn!("Cache lookup for {} failed, using store: {}", slug, e),
        }

        self.store.find(slug).await
    }

    async fn insert(&self, new_link: NewLink) -> LinkResult<Link> {
        new_link.validate()?;

        let stored = self.store.insert(&new_link.into_candidate()).await?;

        if let Err(e) = self.cache.insert(&stored).await {
            warn!("Failed to mirror {} into cache: {}", stored.slug, e);
        }

        Ok(stored)
    }

    async fn update(&self, _link: &Link) -> LinkResult<()> {
        Err(LinkError::NotImplemented("update"))
    }

    async fn delete(&self, slug: &str) -> LinkResult<()> {
        self.store.delete(slug).await?;

        if let Err(e) = self.cache.delete(slug).await {
            warn!("Failed to evict {} from cache: {}", slug, e);
        }

        Ok(())
    }

    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>> {
        debug!("Listing links: limit={}, skip={}", limit, skip);
        self.store.list(limit, skip).await
    }
}
