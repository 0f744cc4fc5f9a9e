//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, adapter wiring, and Axum server lifecycle.

use crate::application::CacheAsideRepository;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::Instrumented;
use crate::infrastructure::cache::{NullLinkCache, RedisLinkCache};
use crate::infrastructure::persistence::PgLinkStore;
use crate::routes::app_router;
use crate::state::{AppLinkService, AppState};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if no connection can be established.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let db = &config.database;
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(Duration::from_secs(db.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(db.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(db.max_lifetime_secs))
        .connect(&db.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Connects the Redis cache, or falls back to [`NullLinkCache`].
///
/// The service stays available without Redis; lookups then always go to the
/// durable store.
pub async fn connect_cache(config: &Config) -> Arc<dyn LinkStore> {
    let Some(redis_url) = &config.cache.redis_url else {
        tracing::info!("Cache disabled (NullLinkCache)");
        return Arc::new(NullLinkCache::new());
    };

    match RedisLinkCache::connect(redis_url, config.cache_settings()).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(Instrumented::new(redis, "redis"))
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullLinkCache.", e);
            Arc::new(NullLinkCache::new())
        }
    }
}

/// Wires the instrumented store and the cache into a [`LinkService`].
pub fn build_link_service(
    pool: PgPool,
    cache: Arc<dyn LinkStore>,
    config: &Config,
) -> AppLinkService {
    let store = Instrumented::new(
        PgLinkStore::new(Arc::new(pool), config.store_timeout()),
        "postgres",
    );
    let repository = CacheAsideRepository::new(Arc::new(store), cache);

    LinkService::new(Arc::new(repository), config.slug_policy())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullLinkCache fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let cache = connect_cache(&config).await;
    let link_service = build_link_service(pool, cache, &config);

    let state = AppState::new(Arc::new(link_service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
