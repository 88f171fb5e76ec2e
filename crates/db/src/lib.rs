//! PostgreSQL data access for makeup-calendar.
//!
//! Exposes the pool helpers used at startup, the row models, zero-sized
//! repositories, and the [`BookingStore`] trait that the HTTP layer depends on.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use error::StoreError;
pub use store::{BookingStore, PgBookingStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from discrete connection settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
