//! Core domain entities.
//!
//! - [`Link`] - A persisted slug to URL mapping
//! - [`NewLink`] - Candidate link before the durable store has accepted it

pub mod link;

pub use link::{Link, NewLink, validate_url};
