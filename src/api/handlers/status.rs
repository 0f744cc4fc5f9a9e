//! Handler for the internal status endpoint.

use axum::Json;

use crate::api::dto::status::StatusResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /internal/status`
///
/// Touches no backend, so it stays green while PostgreSQL or Redis are down.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
