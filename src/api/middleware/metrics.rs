//! Per-route request metrics.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};

/// Counter of handled requests, labelled by `route` and `status`.
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
/// Histogram of request latency in seconds, labelled by `route` and `status`.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Records a counter and a latency sample for every request.
///
/// The `route` label is the matched route template (`/{slug}`), not the raw
/// path, so slugs never become label values. Requests that reach the router
/// fallback are labelled `unmatched`; attach with `Router::layer` so the
/// fallback is wrapped too.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{slug}", get(redirect_handler))
///     .layer(axum::middleware::from_fn(metrics::track));
/// ```
pub async fn track(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let started = Instant::now();
    let response = next.run(request).await;
    let status = response.status().as_u16().to_string();

    counter!(
        HTTP_REQUESTS_TOTAL,
        "route" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "route" => route,
        "status" => status
    )
    .record(started.elapsed().as_secs_f64());

    response
}
