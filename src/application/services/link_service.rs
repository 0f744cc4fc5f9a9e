//! Link creation, resolution and listing.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkRepository;
use crate::utils::slug_generator::{DEFAULT_SLUG_LENGTH, generate_slug};

/// Default number of candidate slugs tried before giving up.
pub const DEFAULT_MAX_SLUG_ATTEMPTS: usize = 5;

/// How slugs are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    /// Length of generated slugs.
    pub length: usize,
    /// Lookups made before allocation fails with `AlreadyExists`.
    pub max_attempts: usize,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_SLUG_LENGTH,
            max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }
}

/// Service for creating and resolving short links.
///
/// Owns slug allocation; persistence and caching are delegated to the
/// repository.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    policy: SlugPolicy,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, policy: SlugPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> SlugPolicy {
        self.policy
    }

    /// Shortens `url` under a freshly allocated slug.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidInput`] if the URL lacks a scheme or host
    /// - [`LinkError::AlreadyExists`] if no free slug was found, or another
    ///   request claimed the allocated slug first
    /// - [`LinkError::Unexpected`] on store failures
    pub async fn create(&self, url: &str) -> LinkResult<Link> {
        let slug = self.allocate_slug(self.policy.length).await?;

        let link = self.repository.insert(NewLink::new(slug, url)).await?;
        info!("Created link {} -> {}", link.slug, link.url);

        Ok(link)
    }

    /// Returns the destination URL stored under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the slug is unknown.
    pub async fn resolve(&self, slug: &str) -> LinkResult<String> {
        self.repository.find(slug).await.map(|link| link.url)
    }

    /// Lists links in insertion order.
    ///
    /// Returns an empty list when `skip` is past the last link.
    pub async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>> {
        self.repository.list(limit, skip).await
    }

    /// Deletes the link stored under `slug`.
    pub async fn delete(&self, slug: &str) -> LinkResult<()> {
        self.repository.delete(slug).await?;
        info!("Deleted link {}", slug);
        Ok(())
    }

    /// Finds a slug of `size` characters that is not yet taken.
    ///
    /// Tries at most `max_attempts` candidates and returns the first one the
    /// repository reports as `NotFound`. A lookup failing for any other reason
    /// aborts allocation with that error instead of being retried.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::AlreadyExists`] when every candidate was taken.
    pub async fn allocate_slug(&self, size: usize) -> LinkResult<String> {
        for attempt in 1..=self.policy.max_attempts {
            let candidate = generate_slug(size);

            match self.repository.find(&candidate).await {
                Err(LinkError::NotFound) => return Ok(candidate),
                Ok(_) => debug!("Slug {} taken (attempt {})", candidate, attempt),
                Err(e) => return Err(e),
            }
        }

        Err(LinkError::AlreadyExists)
    }
}
