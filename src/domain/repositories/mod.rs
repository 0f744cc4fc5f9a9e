//! Data access trait definitions for the domain layer.
//!
//! Two levels of abstraction live here:
//!
//! - [`LinkStore`] - Contract of a single backend (PostgreSQL, Redis, in-memory)
//! - [`LinkRepository`] - What the service talks to; composes a cache and a store
//!
//! Implementations live in `crate::infrastructure` and `crate::application`.
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod link_repository;
pub mod link_store;

pub use link_repository::LinkRepository;
pub use link_store::LinkStore;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use link_store::MockLinkStore;
