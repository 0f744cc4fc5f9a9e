//! API route configuration.

use axum::{
    Router,
    routing::{delete, get},
};

use crate::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, redirect_handler,
    status_handler,
};
use crate::api::middleware::cors;
use crate::state::AppState;

/// Link management routes, open to cross-origin callers.
///
/// # Endpoints
///
/// - `POST   /links`          - Shorten a URL
/// - `GET    /links`          - List links (`limit`, `skip`)
/// - `DELETE /links/{slug}`   - Delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{slug}", delete(delete_link_handler))
        .layer(cors::layer())
}

/// Public redirect and internal status routes.
///
/// # Endpoints
///
/// - `GET /internal/status` - Liveness probe
/// - `GET /{slug}`          - Redirect to the stored URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/internal/status", get(status_handler))
        .route("/{slug}", get(redirect_handler))
}
