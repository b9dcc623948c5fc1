//! Database layer for the PACE case-management tools.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the seven tables
//! - The schema builder that drops and recreates them
//! - The seed pipeline that writes a seed source's rows

pub mod entities;
pub mod schema;
pub mod seed;

pub use seed::{SeedError, SeedSummary, seed, seed_fresh};

use pace_shared::DatabaseConfig;
use sea_orm::{Database, DatabaseConnection, DbErr, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Opens a single connection using typed connection options.
///
/// # Errors
///
/// Returns an error if the server cannot be reached or rejects the login.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        user = %config.user,
        "Connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(config.connect_options())
        .await?;
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

/// Establishes a connection from a URL.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_url(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
