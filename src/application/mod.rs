//! Application layer: repository composition and link services.
//!
//! - [`CacheAsideRepository`] - reads through a cache, writes to the durable store
//! - [`services::LinkService`] - slug allocation and link lifecycle

pub mod cache_aside_repository;
pub mod services;

pub use cache_aside_repository::CacheAsideRepository;
