//! HTTP middleware for request processing.
//!
//! Provides CORS, request metrics and tracing.

pub mod cors;
pub mod metrics;
pub mod tracing;
