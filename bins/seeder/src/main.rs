//! Synthetic sample-data seeder for PACE development and testing.
//!
//! Adds beneficiaries, cases, events and reminders drawn from fixed word
//! pools to an existing schema. Case codes continue after the highest code
//! already stored for the current year. Set `SEED_RNG_SEED` to replay a run.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pace_core::seed::{DEV_ADMIN_EMAIL, DEV_PASSWORD};
use pace_core::{SyntheticGenerator, SyntheticOptions};
use pace_db::{connect, seed};
use pace_shared::{AppConfig, AppError};

/// Log filter used when `RUST_LOG` is unset. Covers the library crates and
/// this binary's own target.
const DEFAULT_LOG_FILTER: &str = "pace=info,seeder=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => exit_with(&AppError::from(e)),
    };

    let rng_seed = config.seed.rng_seed.unwrap_or_else(rand::random);
    info!(rng_seed, "Using random seed (set SEED_RNG_SEED to replay)");

    let options = SyntheticOptions {
        beneficiaries: config.seed.beneficiaries,
        reminder_limit: config.seed.reminder_limit,
        ..SyntheticOptions::new(Utc::now().date_naive())
    };
    let mut generator = match SyntheticGenerator::seeded(options, rng_seed) {
        Ok(generator) => generator,
        Err(e) => exit_with(&AppError::Configuration(e.to_string())),
    };

    let db = match connect(&config.database).await {
        Ok(db) => db,
        Err(e) => exit_with(&AppError::Connection(e.to_string())),
    };
    info!("Connected to database");

    let summary = seed(&db, &mut generator).await.map_err(|e| {
        let err = AppError::Operation(e.to_string());
        error!(code = err.error_code(), error = %err, "Seeding failed, changes rolled back");
        err
    })?;

    info!(
        first = summary.case_codes.first().map(String::as_str),
        last = summary.case_codes.last().map(String::as_str),
        "Seeding complete"
    );
    info!(email = DEV_ADMIN_EMAIL, password = DEV_PASSWORD, "Development login");

    Ok(())
}

fn exit_with(err: &AppError) -> ! {
    error!(code = err.error_code(), error = %err, "Seeder aborted");
    std::process::exit(err.exit_code())
}
