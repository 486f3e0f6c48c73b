//! HTTP server initialization and runtime setup.
//!
//! Builds the mapping store, wires the service into the router and runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::MappingStore;
use crate::infrastructure::memory::InMemoryMappingStore;
use crate::infrastructure::persistence::PgMappingStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL pool + migrations, or in-memory)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database URL is malformed
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let shortener = Arc::new(ShortenerService::new(store));
    let state = AppState::new(shortener, !config.is_production());

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state, &config.static_dir));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the store selected by [`Config::storage_backend`].
async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Ok(Arc::new(InMemoryMappingStore::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;
            let pool = connect_pool(config, database_url).await?;
            Ok(Arc::new(PgMappingStore::new(Arc::new(pool))))
        }
    }
}

/// Connects the PostgreSQL pool and applies migrations.
///
/// A failed first connection is logged and does not stop startup: the pool
/// is then created lazily and requests see store failures until the database
/// becomes reachable. Migrations only run after a successful connection.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or migrations fail.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    match pool_options(config).connect(database_url).await {
        Ok(pool) => {
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;

            Ok(pool)
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Continuing with a lazy pool.",
                e
            );

            pool_options(config)
                .connect_lazy(database_url)
                .context("Invalid database URL")
        }
    }
}

fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
