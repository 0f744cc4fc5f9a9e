//! Per-operation deadlines for backend calls.

use std::future::Future;
use std::time::Duration;

use crate::domain::error::{LinkError, LinkResult};

/// Runs `op` and fails with `Unexpected` if it does not finish within `limit`.
///
/// The backend future is dropped on expiry, cancelling the in-flight request.
pub(crate) async fn with_deadline<T, F>(
    backend: &'static str,
    operation: &'static str,
    limit: Duration,
    op: F,
) -> LinkResult<T>
where
    F: Future<Output = LinkResult<T>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result,
        Err(_) => Err(LinkError::unexpected(format!(
            "{backend} {operation} timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
