//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Link;
use crate::domain::error::{LinkError, LinkResult};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::deadline::with_deadline;

const BACKEND: &str = "postgres";

#[derive(Debug, FromRow)]
struct LinkRow {
    slug: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.slug, row.url, row.created_at)
    }
}

/// Authoritative link storage.
///
/// Slug uniqueness is enforced by the `links_slug_key` constraint; violations
/// surface as [`LinkError::AlreadyExists`]. `created_at` is assigned by the
/// database on insert.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgLinkStore {
    /// Creates a new store over a shared connection pool.
    ///
    /// Every query is bounded by `timeout`.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find(&self, slug: &str) -> LinkResult<Link> {
        with_deadline(BACKEND, "find", self.timeout, async {
            let row = sqlx::query_as::<_, LinkRow>(
                "SELECT slug, url, created_at FROM links WHERE slug = $1",
            )
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

            row.map(Link::from).ok_or(LinkError::NotFound)
        })
        .await
    }

    async fn insert(&self, link: &Link) -> LinkResult<Link> {
        with_deadline(BACKEND, "insert", self.timeout, async {
            let row = sqlx::query_as::<_, LinkRow>(
                r#"
                INSERT INTO links (slug, url)
                VALUES ($1, $2)
                RETURNING slug, url, created_at
                "#,
            )
            .bind(&link.slug)
            .bind(&link.url)
            .fetch_one(self.pool.as_ref())
            .await?;

            Ok::<_, LinkError>(Link::from(row))
        })
        .await
    }

    async fn update(&self, _link: &Link) -> LinkResult<()> {
        Err(LinkError::NotImplemented("update"))
    }

    async fn delete(&self, slug: &str) -> LinkResult<()> {
        with_deadline(BACKEND, "delete", self.timeout, async {
            let result = sqlx::query("DELETE FROM links WHERE slug = $1")
                .bind(slug)
                .execute(self.pool.as_ref())
                .await?;

            if result.rows_affected() == 0 {
                return Err(LinkError::NotFound);
            }

            Ok::<_, LinkError>(())
        })
        .await
    }

    async fn list(&self, limit: i64, skip: i64) -> LinkResult<Vec<Link>> {
        with_deadline(BACKEND, "list", self.timeout, async {
            let rows = sqlx::query_as::<_, LinkRow>(
                r#"
                SELECT slug, url, created_at
                FROM links
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(skip)
            .fetch_all(self.pool.as_ref())
            .await?;

            let links: Vec<Link> = rows.into_iter().map(Link::from).collect();
            Ok::<_, LinkError>(links)
        })
        .await
    }
}
