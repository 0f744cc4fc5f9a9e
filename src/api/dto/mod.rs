//! Data Transfer Objects for API requests and responses.
//!
//! DTOs handle JSON serialization and query string parsing. Link responses
//! reuse the [`Link`](crate::domain::entities::Link) entity, which already
//! serializes to the public camelCase shape.

pub mod links;
pub mod status;
