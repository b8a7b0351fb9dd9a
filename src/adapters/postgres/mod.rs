//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides:
//! - `connect` - Builds a connection pool from `DatabaseConfig`
//! - `run_migrations` - Applies the embedded `migrations/` directory
//! - `PostgresCategoryRepository` - Category persistence and search

mod category_repository;

pub use category_repository::PostgresCategoryRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool using the configured bounds and timeouts.
///
/// # Errors
///
/// - `DatabaseError` if the database cannot be reached
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    tracing::info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "Database pool ready"
    );

    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    Ok(pool)
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))?;

    tracing::info!("Database migrations applied");
    Ok(())
}
