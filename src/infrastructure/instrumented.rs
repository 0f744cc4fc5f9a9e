//! Metrics instrumentation for link stores.
//!
//! Wraps any [`LinkStore`] to emit metrics through the process-wide `metrics`
//! recorder without touching what the wrapped store returns.

use std::time::Instant;

use async_trait::async_trait;
use metrics::{counter, histogram};

use crate::domain::entities::Link;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkStore;

/// Histogram of operation latency, labelled by `name` and `operation`.
pub const OPERATION_DURATION_SECONDS: &str = "link_store_operation_duration_seconds";
/// Counter of operation outcomes, labelled by `name` and `result` (`success`/`error`).
pub const OPERATIONS_TOTAL: &str = "link_store_operations_total";
/// Counter of lookup outcomes, labelled by `name` and `result` (`hit`/`miss`).
pub const FIND_RESULTS_TOTAL: &str = "link_store_find_results_total";

/// Decorator that records metrics for every call to the inner store.
///
/// - `link_store_operation_duration_seconds{name, operation}` - latency
/// - `link_store_operations_total{name, result}` - `NotFound` counts as `success`
/// - `link_store_find_results_total{name, result}` - `miss` only for `NotFound`
///
/// # Example
///
/// ```ignore
/// let store = Instrumented::new(PgLinkStore::new(pool, timeout), "postgres");
/// let cache = Instrumented::new(RedisLinkCache::new(conn, settings), "redis");
/// ```
pub struct Instrumented<S> {
    inner: S,
    name: &'static str,
}

impl<S> Instrumented<S> {
    /// Wraps `inner`, labelling its metrics with `name`.
    pub fn new(inner: S, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// Get a reference to the inner store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn observe<T>(&self, operation: &'static str, started: Instant, result: &LinkResult<T>) {
        histogram!(
            OPERATION_DURATION_SECONDS,
            "name" => self.name,
            "operation" => operation
        )
        .record(started.elapsed().as_secs_f64());

        counter!(
            OPERATIONS_TOTAL,
            "name" => self.name,
            "result" => operation_result(result)
        )
        .increment(1);
    }
}

/// `NotFound` is an expected outcome and counts as a success.
fn operation_result<T>(result: &LinkResult<T>) -> &'static str {
    match result {
        Ok(_) | Err(LinkError::NotFound) => "success",
        Err(_) => "error",
    }
}

fn find_result<T>(result: &LinkResult<T>) -> &'static str {
    match result {
        Err(LinkError::NotFound) => "miss",
        _ => "hit",
    }
}

#[async_trait]
impl<S: LinkStore> LinkStore for Instrumented<S> {
    async fn find(&self, slug: &str) -> LinkResult<Link> {
        let started = Instant::now();
        let result = self.inner.find(slug).await;

        counter!(
            FIND_RESULTS_TOTAL,
            "name" => self.name,
            "result" => find_result(&result)
        )
        .increment(1);
        self.observe("find", started, &result);

        result
    }

    async fn insert(&self, link: &Link) -> LinkResult<Link> {
        let started = Instant::now();
        let result = self.inner.insert(link).await;
        self.observe("insert", started, &result);
        result
    }

    async fn update(&self, link: &Link) -> LinkResult<()> {
        let started = Instant::now();
        let result = self.inner.update(link).await;
        self.observe("update", started, &result);
        result
    }

    async fn delete(&self, slug: &str) -> LinkResult<()> {
        let started = Instant::now();
        let result = self.inner.delete(slug).await;
        self.observe("delete", started, &result);
        result
    }

    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>> {
        let started = Instant::now();
        let result = self.inner.list(limit, skip).await;
        self.observe("list", started, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use std::future::Future;

    /// Metric name, labels and value captured by the debugging recorder.
    struct Recorded(Vec<(String, Vec<(String, String)>, DebugValue)>);

    impl Recorded {
        fn find(&self, metric: &str, labels: &[(&str, &str)]) -> Option<&DebugValue> {
            self.0.iter().find_map(|(name, recorded, value)| {
                let matches = name == metric
                    && labels
                        .iter()
                        .all(|(k, v)| recorded.iter().any(|(rk, rv)| rk == k && rv == v));
                matches.then_some(value)
            })
        }

        fn counter(&self, metric: &str, labels: &[(&str, &str)]) -> u64 {
            match self.find(metric, labels) {
                Some(DebugValue::Counter(n)) => *n,
                _ => 0,
            }
        }

        fn histogram_samples(&self, labels: &[(&str, &str)]) -> usize {
            match self.find(OPERATION_DURATION_SECONDS, labels) {
                Some(DebugValue::Histogram(samples)) => samples.len(),
                _ => 0,
            }
        }
    }

    fn sample_link() -> Link {
        Link::new("aaaaa", "https://www.google.com", Utc::now())
    }

    /// Runs `fut` with a fresh recorder installed on this thread.
    fn with_recorder<F: Future<Output = ()>>(fut: F) -> Recorded {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap()
                .block_on(fut)
        });

        Recorded(
            snapshotter
                .snapshot()
                .into_vec()
                .into_iter()
                .map(|(key, _, _, value)| {
                    let key = key.key();
                    let labels = key
                        .labels()
                        .map(|l| (l.key().to_string(), l.value().to_string()))
                        .collect();
                    (key.name().to_string(), labels, value)
                })
                .collect(),
        )
    }

    #[test]
    fn test_find_hits_and_misses_are_counted() {
        let mut inner = MockLinkStore::new();
        let mut calls = 0;
        inner.expect_find().times(5).returning(move |_| {
            calls += 1;
            if calls <= 3 {
                Ok(sample_link())
            } else {
                Err(LinkError::NotFound)
            }
        });
        let store = Instrumented::new(inner, "postgres");

        let recorded = with_recorder(async move {
            for _ in 0..5 {
                let _ = store.find("aaaaa").await;
            }
        });

        let hits = recorded.counter(FIND_RESULTS_TOTAL, &[("name", "postgres"), ("result", "hit")]);
        let misses = recorded.counter(FIND_RESULTS_TOTAL, &[("name", "postgres"), ("result", "miss")]);
        assert_eq!(hits, 3);
        assert_eq!(misses, 2);

        let successes = recorded.counter(OPERATIONS_TOTAL, &[("name", "postgres"), ("result", "success")]);
        let errors = recorded.counter(OPERATIONS_TOTAL, &[("name", "postgres"), ("result", "error")]);
        assert_eq!(successes, 5);
        assert_eq!(errors, 0);

        assert_eq!(recorded.histogram_samples(&[("name", "postgres"), ("operation", "find")]), 5);
    }

    #[test]
    fn test_unexpected_find_error_is_a_hit_and_an_error() {
        let mut inner = MockLinkStore::new();
        inner
            .expect_find()
            .times(1)
            .returning(|_| Err(LinkError::unexpected("connection refused")));
        let store = Instrumented::new(inner, "redis");

        let recorded = with_recorder(async move {
            let result = store.find("aaaaa").await;
            assert!(matches!(result, Err(LinkError::Unexpected(_))));
        });

        assert_eq!(recorded.counter(FIND_RESULTS_TOTAL, &[("name", "redis"), ("result", "hit")]), 1);
        assert_eq!(recorded.counter(FIND_RESULTS_TOTAL, &[("name", "redis"), ("result", "miss")]), 0);
        assert_eq!(recorded.counter(OPERATIONS_TOTAL, &[("name", "redis"), ("result", "error")]), 1);
    }

    #[test]
    fn test_insert_passes_value_through_and_records_success() {
        let mut inner = MockLinkStore::new();
        inner.expect_insert().times(1).returning(|link| Ok(link.clone()));
        let store = Instrumented::new(inner, "postgres");
        let link = sample_link();
        let expected = link.clone();

        let recorded = with_recorder(async move {
            assert_eq!(store.insert(&link).await.unwrap(), expected);
        });

        assert_eq!(recorded.counter(OPERATIONS_TOTAL, &[("name", "postgres"), ("result", "success")]), 1);
        assert_eq!(recorded.histogram_samples(&[("name", "postgres"), ("operation", "insert")]), 1);
        assert_eq!(recorded.counter(FIND_RESULTS_TOTAL, &[("name", "postgres")]), 0);
    }

    #[test]
    fn test_insert_conflict_passes_through_as_error() {
        let mut inner = MockLinkStore::new();
        inner.expect_insert().times(1).returning(|_| Err(LinkError::AlreadyExists));
        let store = Instrumented::new(inner, "postgres");

        let recorded = with_recorder(async move {
            let result = store.insert(&sample_link()).await;
            assert!(matches!(result, Err(LinkError::AlreadyExists)));
        });

        assert_eq!(recorded.counter(OPERATIONS_TOTAL, &[("name", "postgres"), ("result", "error")]), 1);
    }

    #[test]
    fn test_delete_not_found_counts_as_success() {
        let mut inner = MockLinkStore::new();
        inner.expect_delete().times(1).returning(|_| Err(LinkError::NotFound));
        let store = Instrumented::new(inner, "postgres");

        let recorded = with_recorder(async move {
            assert!(matches!(store.delete("aaaaa").await, Err(LinkError::NotFound)));
        });

        assert_eq!(recorded.counter(OPERATIONS_TOTAL, &[("name", "postgres"), ("result", "success")]), 1);
        assert_eq!(recorded.histogram_samples(&[("name", "postgres"), ("operation", "delete")]), 1);
    }

    #[test]
    fn test_update_not_implemented_is_an_error() {
        let mut inner = MockLinkStore::new();
        inner
            .expect_update()
            .times(1)
            .returning(|_| Err(LinkError::NotImplemented("update")));
        let store = Instrumented::new(inner, "redis");

        let recorded = with_recorder(async move {
            let result = store.update(&sample_link()).await;
            assert!(matches!(result, Err(LinkError::NotImplemented("update"))));
        });

        assert_eq!(recorded.counter(OPERATIONS_TOTAL, &[("name", "redis"), ("result", "error")]), 1);
    }

    #[test]
    fn test_list_returns_inner_links() {
        let mut inner = MockLinkStore::new();
        inner
            .expect_list()
            .withf(|limit, skip| *limit == 2 && *skip == 0)
            .times(1)
            .returning(|_, _| Ok(vec![sample_link(), sample_link()]));
        let store = Instrumented::new(inner, "postgres");

        let recorded = with_recorder(async move {
            assert_eq!(store.list(2, 0).await.unwrap().len(), 2);
        });

        assert_eq!(recorded.histogram_samples(&[("name", "postgres"), ("operation", "list")]), 1);
    }

    #[test]
    fn test_stacked_decorators_keep_separate_labels() {
        let mut db = MockLinkStore::new();
        db.expect_find().returning(|_| Ok(sample_link()));
        let mut cache = MockLinkStore::new();
        cache.expect_find().returning(|_| Err(LinkError::NotFound));

        let db = Instrumented::new(db, "postgres");
        let cache = Instrumented::new(cache, "redis");

        let recorded = with_recorder(async move {
            let _ = cache.find("aaaaa").await;
            let _ = db.find("aaaaa").await;
        });

        assert_eq!(recorded.counter(FIND_RESULTS_TOTAL, &[("name", "redis"), ("result", "miss")]), 1);
        assert_eq!(recorded.counter(FIND_RESULTS_TOTAL, &[("name", "postgres"), ("result", "hit")]), 1);
    }
}
