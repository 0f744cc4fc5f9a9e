//! DTO for the internal status endpoint.

use serde::Serialize;

/// Liveness payload of `GET /internal/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub running: bool,
    pub version: &'static str,
}
