//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /links`            - Shorten a URL
//! - `GET  /links`            - List links
//! - `DELETE /links/{slug}`   - Delete a link
//! - `GET  /internal/status`  - Liveness probe
//! - `GET  /{slug}`           - Short link redirect
//!
//! # Middleware
//!
//! - **Metrics** - Request counter and latency histogram per route template
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive policy on `/links`
//! - **Path normalization** - Trailing slash handling

use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;

/// All routes with their middleware, before path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .merge(api::routes::public_routes())
        .layer(middleware::from_fn(metrics::track))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
