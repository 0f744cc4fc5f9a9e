//! Durable link store implementations.
//!
//! - [`PgLinkStore`] - PostgreSQL via SQLx, the authoritative store
//! - [`MemoryLinkStore`] - In-process store with the same semantics

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
