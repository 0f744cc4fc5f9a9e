//! Repository trait consumed by the link service.

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkResult;
use async_trait::async_trait;

/// Single entry point to links, hiding how cache and durable store cooperate.
///
/// # Implementations
///
/// - [`crate::application::CacheAsideRepository`] - Cache first, store authoritative
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by slug.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no link exists, `Unexpected` on store errors.
    async fn find(&self, slug: &str) -> LinkResult<Link>;

    /// Validates and persists a new link.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed URLs and `AlreadyExists` when the
    /// slug is taken in the durable store.
    async fn insert(&self, new_link: NewLink) -> LinkResult<Link>;

    /// Always fails with `NotImplemented`.
    async fn update(&self, link: &Link) -> LinkResult<()>;

    /// Deletes a link by slug.
    async fn delete(&self, slug: &str) -> LinkResult<()>;

    /// Lists links in insertion order.
    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>>;
}
