//! Handlers for link management endpoints (create, list, delete).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, ListLinksQuery};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL under a freshly allocated slug.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.google.com" }
/// ```
///
/// # Response (201 Created)
///
/// ```json
/// { "slug": "b4zoo", "url": "https://www.google.com", "createdAt": "2020-05-01T00:00:00Z" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON or the URL is invalid
/// - 409 if no free slug could be allocated
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Link>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request(
            "Invalid json in request body",
            json!({ "reason": e.body_text() }),
        )
    })?;
    payload.validate()?;

    let link = state.link_service.create(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Lists links in insertion order.
///
/// # Endpoint
///
/// `GET /links?limit=10&skip=0`
///
/// Both parameters are required: `limit` in 1..=1000, `skip` >= 0.
pub async fn list_links_handler(
    State(state): State<AppState>,
    query: Result<Query<ListLinksQuery>, QueryRejection>,
) -> Result<Json<Vec<Link>>, AppError> {
    let Query(query) = query.map_err(|e| {
        AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
    })?;
    let (limit, skip) = query.into_limit_skip()?;

    let links = state.link_service.list(limit, skip).await?;

    Ok(Json(links))
}

/// Deletes a link and evicts it from the cache.
///
/// # Endpoint
///
/// `DELETE /links/{slug}`
///
/// # Response
///
/// - **204 No Content**: Link deleted
/// - **404 Not Found**: No link under this slug
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
