//! Adapter contract implemented by every backing technology.

use crate::domain::entities::Link;
use crate::domain::error::LinkResult;
use async_trait::async_trait;

/// Single-backend access to links.
///
/// Implemented by the durable store, the cache, and by decorators wrapping
/// either. Every call is one request/response against the backend; no
/// implementation keeps per-operation state, so a shared instance can serve
/// concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL, authoritative
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - In-process, deterministic
/// - [`crate::infrastructure::cache::RedisLinkCache`] - Redis with TTL
/// - [`crate::infrastructure::cache::NullLinkCache`] - Caching disabled
/// - [`crate::infrastructure::instrumented::Instrumented`] - Metrics decorator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks a link up by slug.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`](crate::domain::error::LinkError::NotFound)
    /// when nothing is stored under `slug`.
    async fn find(&self, slug: &str) -> LinkResult<Link>;

    /// Stores `link` and returns the stored record.
    ///
    /// Durable stores assign `created_at` themselves and return it; caches
    /// store the record as given.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` when the backend enforces slug uniqueness and
    /// the slug is taken.
    async fn insert(&self, link: &Link) -> LinkResult<Link>;

    /// Links are immutable; every implementation returns `NotImplemented`.
    async fn update(&self, link: &Link) -> LinkResult<()>;

    /// Removes the link stored under `slug`.
    async fn delete(&self, slug: &str) -> LinkResult<()>;

    /// Returns up to `limit` links in insertion order, skipping the first `skip`.
    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>>;
}
