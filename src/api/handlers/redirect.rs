//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Lookups go through the cache-aside repository: the cache answers when it
/// can, the durable store otherwise.
///
/// # Response
///
/// - **301 Moved Permanently** with `Location` set to the stored URL
/// - **404 Not Found** if the slug is unknown
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve(&slug).await?;
    debug!("Redirecting {} -> {}", slug, url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]))
}
