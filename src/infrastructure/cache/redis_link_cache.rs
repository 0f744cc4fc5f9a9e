//! Redis-backed link cache.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::entities::Link;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::deadline::with_deadline;

const BACKEND: &str = "redis";

/// Settings applied by [`RedisLinkCache`].
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Namespace prepended to every key.
    pub key_prefix: String,
    /// Lifetime of an entry written by `insert`.
    pub ttl_seconds: u64,
    /// Upper bound for a single Redis round trip.
    pub timeout: Duration,
}

/// Volatile, TTL-bounded mirror of durable links.
///
/// Links are stored as JSON under `"{prefix}^l^{slug}"`. Uses a
/// `ConnectionManager`, which multiplexes one connection across concurrent
/// callers and reconnects on failure. Unlike the durable store, errors are
/// returned to the caller; deciding to ignore them is the repository's job.
pub struct RedisLinkCache {
    client: ConnectionManager,
    settings: CacheSettings,
}

impl RedisLinkCache {
    /// Wraps an already established connection.
    pub fn new(client: ConnectionManager, settings: CacheSettings) -> Self {
        Self { client, settings }
    }

    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, settings: CacheSettings) -> LinkResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)?;
        let manager = with_deadline(BACKEND, "connect", settings.timeout, async {
            let manager = ConnectionManager::new(client).await?;
            let mut probe = manager.clone();
            probe.ping::<()>().await?;
            Ok::<_, LinkError>(manager)
        })
        .await?;

        info!("✓ Connected to Redis");

        Ok(Self::new(manager, settings))
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, slug: &str) -> String {
        cache_key(&self.settings.key_prefix, slug)
    }
}

/// Key under which `slug` is cached.
pub fn cache_key(prefix: &str, slug: &str) -> String {
    format!("{prefix}^l^{slug}")
}

#[async_trait]
impl LinkStore for RedisLinkCache {
    async fn find(&self, slug: &str) -> LinkResult<Link> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        let raw = with_deadline(BACKEND, "find", self.settings.timeout, async {
            Ok::<_, LinkError>(conn.get::<_, Option<String>>(&key).await?)
        })
        .await?;

        match raw {
            Some(payload) => {
                debug!("Cache HIT: {}", slug);
                serde_json::from_str(&payload).map_err(LinkError::unexpected)
            }
            None => {
                debug!("Cache MISS: {}", slug);
                Err(LinkError::NotFound)
            }
        }
    }

    async fn insert(&self, link: &Link) -> LinkResult<Link> {
        let key = self.build_key(&link.slug);
        let payload = serde_json::to_string(link).map_err(LinkError::unexpected)?;
        let ttl = self.settings.ttl_seconds;
        let mut conn = self.client.clone();

        with_deadline(BACKEND, "insert", self.settings.timeout, async {
            Ok::<_, LinkError>(conn.set_ex::<_, _, ()>(&key, payload, ttl).await?)
        })
        .await?;

        debug!("Cache SET: {} (TTL: {}s)", link.slug, ttl);
        Ok(link.clone())
    }

    async fn update(&self, _link: &Link) -> LinkResult<()> {
        Err(LinkError::NotImplemented("update"))
    }

    async fn delete(&self, slug: &str) -> LinkResult<()> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        let deleted = with_deadline(BACKEND, "delete", self.settings.timeout, async {
            Ok::<_, LinkError>(conn.del::<_, i64>(&key).await?)
        })
        .await?;

        if deleted > 0 {
            debug!("Cache INVALIDATE: {}", slug);
        }
        Ok(())
    }

    async fn list(&self, _limit: i64, _skip: i64) -> LinkResult<Vec<Link>> {
        // The cache holds an arbitrary subset of links with no order.
        Err(LinkError::NotImplemented("list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_namespaced() {
        assert_eq!(cache_key("shortener", "a1CDz"), "shortener^l^a1CDz");
        assert_eq!(cache_key("", "a1CDz"), "^l^a1CDz");
    }
}
