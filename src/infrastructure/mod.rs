//! Infrastructure layer for external integrations.
//!
//! Implements [`LinkStore`](crate::domain::repositories::LinkStore) against
//! concrete backends.
//!
//! # Modules
//!
//! - [`cache`] - Redis and no-op cache adapters
//! - [`persistence`] - PostgreSQL and in-memory durable stores
//! - [`instrumented`] - Metrics decorator usable on any adapter

pub mod cache;
mod deadline;
pub mod instrumented;
pub mod persistence;

pub use instrumented::Instrumented;
