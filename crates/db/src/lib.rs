//! Storage gateway for the project catalog.
//!
//! Connections come from a pool built from an explicit [`DbConfig`]; every
//! repository call checks out one connection for one statement and hands it
//! back when the statement completes.

pub mod catalog;
pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

use sqlx::postgres::PgPoolOptions;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, DbConfig};
pub use schema::ensure_schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database configuration.
///
/// Opens the first connection eagerly so bad credentials, an unreachable host
/// or a failed TLS handshake are reported at startup.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
