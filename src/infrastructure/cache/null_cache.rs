//! No-op cache implementation for disabled caching.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkStore;

/// A cache that never holds anything.
///
/// Used when Redis is not configured or unreachable at startup. Every lookup
/// is a miss and every write succeeds without storing data, so the
/// repository always falls through to the durable store.
pub struct NullLinkCache;

impl NullLinkCache {
    /// Creates a new NullLinkCache instance.
    pub fn new() -> Self {
        debug!("Using NullLinkCache (caching disabled)");
        Self
    }
}

impl Default for NullLinkCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for NullLinkCache {
    async fn find(&self, _slug: &str) -> LinkResult<Link> {
        Err(LinkError::NotFound)
    }

    async fn insert(&self, link: &Link) -> LinkResult<Link> {
        Ok(link.clone())
    }

    async fn update(&self, _link: &Link) -> LinkResult<()> {
        Err(LinkError::NotImplemented("update"))
    }

    async fn delete(&self, _slug: &str) -> LinkResult<()> {
        Ok(())
    }

    async fn list(&self, _limit: i64, _skip: i64) -> LinkResult<Vec<Link>> {
        Err(LinkError::NotImplemented("list"))
    }
}
