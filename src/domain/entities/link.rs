//! Link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::{LinkError, LinkResult};

/// A persisted short link.
///
/// `created_at` is assigned by the durable store; copies held by the cache
/// only mirror it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(slug: impl Into<String>, url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}

impl NewLink {
    pub fn new(slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
        }
    }

    /// Checks that the URL parses and carries both a scheme and a host.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidInput`] when the URL is empty, unparsable,
    /// or lacks a host.
    pub fn validate(&self) -> LinkResult<()> {
        validate_url(&self.url)
    }

    /// Builds the record handed to adapters. Stores overwrite `created_at`
    /// with their own clock; the returned link is the authoritative one.
    pub(crate) fn into_candidate(self) -> Link {
        Link::new(self.slug, self.url, Utc::now())
    }
}

/// Validates a destination URL.
pub fn validate_url(raw: &str) -> LinkResult<()> {
    if raw.trim().is_empty() {
        return Err(LinkError::invalid("URL must not be empty"));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| LinkError::invalid(format!("parsing URL failed: {e}")))?;

    if parsed.scheme().is_empty() || parsed.host_str().is_none_or(str::is_empty) {
        return Err(LinkError::invalid("URL is malformed"));
    }

    Ok(())
}
