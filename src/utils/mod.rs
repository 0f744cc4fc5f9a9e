//! Helper functions used across the application.
//!
//! - [`slug_generator`] - Random slug generation
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
pub mod slug_generator;
