//! Shared helpers for database integration tests.
//!
//! Tests run against the database named by `PACE_TEST_DATABASE_URL` and
//! rebuild its schema, so point it at a scratch database. When the variable
//! is unset or the server is unreachable the tests are skipped.

#![allow(dead_code)]

use pace_db::connect_url;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tokio::sync::Mutex;

/// Serializes tests within one binary; they all share one schema.
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Connects to the test database, or returns `None` to skip the test.
pub async fn test_db() -> Option<DatabaseConnection> {
    let Ok(url) = std::env::var("PACE_TEST_DATABASE_URL") else {
        eprintln!("Skipping test - PACE_TEST_DATABASE_URL not set");
        return None;
    };
    match connect_url(&url).await {
        Ok(db) => Some(db),
        Err(e) => {
            eprintln!("Skipping test - database not available: {e}");
            None
        }
    }
}

/// Counts the rows of `table`.
pub async fn count(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            DbBackend::Postgres,
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .expect("Failed to count rows")
        .expect("COUNT returned no row");
    row.try_get("", "n").expect("Failed to read count")
}

/// Names of the tables in the public schema.
pub async fn public_tables(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Postgres,
            "SELECT table_name::text AS table_name FROM information_schema.tables \
             WHERE table_schema = 'public'",
        ))
        .await
        .expect("Failed to list tables");
    rows.iter()
        .map(|row| row.try_get("", "table_name").expect("Failed to read table name"))
        .collect()
}
