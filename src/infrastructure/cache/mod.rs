//! Cache adapters for fast slug lookups.
//!
//! Both implement [`LinkStore`](crate::domain::repositories::LinkStore):
//! - [`RedisLinkCache`] - Production Redis-backed cache
//! - [`NullLinkCache`] - No-op implementation for disabled caching

mod null_cache;
mod redis_link_cache;

pub use null_cache::NullLinkCache;
pub use redis_link_cache::{CacheSettings, RedisLinkCache, cache_key};
