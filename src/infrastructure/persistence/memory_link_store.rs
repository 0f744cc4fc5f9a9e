//! In-process link store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkStore;

/// Deterministic, insertion-ordered store kept in memory.
///
/// Behaves like the durable store: slugs are unique, `created_at` is assigned
/// on insert, and deleting an unknown slug reports `NotFound`. Used by
/// integration tests and local runs without PostgreSQL.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<Vec<Link>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find(&self, slug: &str) -> LinkResult<Link> {
        self.links
            .read()
            .await
            .iter()
            .find(|link| link.slug == slug)
            .cloned()
            .ok_or(LinkError::NotFound)
    }

    async fn insert(&self, link: &Link) -> LinkResult<Link> {
        let mut links = self.links.write().await;

        if links.iter().any(|existing| existing.slug == link.slug) {
            return Err(LinkError::AlreadyExists);
        }

        let stored = Link::new(link.slug.clone(), link.url.clone(), Utc::now());
        links.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, _link: &Link) -> LinkResult<()> {
        Err(LinkError::NotImplemented("update"))
    }

    async fn delete(&self, slug: &str) -> LinkResult<()> {
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|link| link.slug != slug);

        if links.len() == before {
            return Err(LinkError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let skip = usize::try_from(skip).unwrap_or(0);

        Ok(self
            .links
            .read()
            .await
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
