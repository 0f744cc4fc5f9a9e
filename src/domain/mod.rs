//! Domain layer containing the link model, its error taxonomy and the data
//! access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - [`error::LinkError`], shared by every layer below HTTP
//!
//! The domain layer has no dependency on concrete backends; adapters in
//! [`crate::infrastructure`] implement its traits.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::{LinkError, LinkResult};
