// src/config/db.rs
// DOCUMENTATION: Document store initialization
// PURPOSE: Build the configured store backend once at startup

use crate::config::{Config, StoreBackend};
use crate::db::{DocumentStore, MemoryStore, PostgresStore};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

/// Initialize the document store selected by STORE_BACKEND
/// Called once during application startup in main.rs; the returned handle
/// is shared by every worker and closed when the server stops
pub async fn init_store(config: &Config) -> Result<Arc<dyn DocumentStore>, sqlx::Error> {
    let backend = config
        .store_backend()
        .map_err(|e| sqlx::Error::Configuration(e.into()))?;
    log::info!("Initializing {} document store", backend);

    match backend {
        StoreBackend::Postgres => {
            let pool = init_db_pool(config).await?;
            Ok(Arc::new(PostgresStore::new(pool)))
        }
        StoreBackend::Memory => {
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Initialize PostgreSQL connection pool and apply migrations
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Initializing database pool");

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
