//! PACE database setup.
//!
//! Drops and recreates every case-management table in the `soe` database,
//! then loads the four-case development fixture. DESTRUCTIVE: all existing
//! rows are lost.
//!
//! Usage: cargo run --bin setup

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pace_core::MinimalFixture;
use pace_core::seed::{DEV_ADMIN_EMAIL, DEV_PASSWORD};
use pace_db::{connect, seed_fresh};
use pace_shared::{AppError, DatabaseConfig, SETUP_DATABASE};

/// Log filter used when `RUST_LOG` is unset. Covers the library crates and
/// this binary's own target.
const DEFAULT_LOG_FILTER: &str = "pace=info,setup=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DatabaseConfig::load() {
        Ok(config) => config.with_database(SETUP_DATABASE),
        Err(e) => exit_with(&AppError::from(e)),
    };

    warn!(
        database = %config.name,
        "Rebuilding schema; every existing case-management row will be deleted"
    );

    let db = match connect(&config).await {
        Ok(db) => db,
        Err(e) => exit_with(&AppError::Connection(e.to_string())),
    };
    info!("Connected to database");

    let summary = seed_fresh(&db, &mut MinimalFixture).await.map_err(|e| {
        let err = AppError::Operation(e.to_string());
        error!(code = err.error_code(), error = %err, "Setup failed, changes rolled back");
        err
    })?;

    info!(case_codes = ?summary.case_codes, "Setup complete");
    info!(email = DEV_ADMIN_EMAIL, password = DEV_PASSWORD, "Development login");

    Ok(())
}

fn exit_with(err: &AppError) -> ! {
    error!(code = err.error_code(), error = %err, "Setup aborted");
    std::process::exit(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_LOG_FILTER;
    use tracing::Level;
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

    #[test]
    fn test_default_filter_keeps_binary_and_library_logs() {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::ERROR));
            assert!(tracing::enabled!(Level::WARN));
            assert!(tracing::enabled!(Level::INFO));
            assert!(tracing::enabled!(target: "pace_db::schema", Level::WARN));
            assert!(tracing::enabled!(target: "pace_db::seed", Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }
}
