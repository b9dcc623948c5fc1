//! Application configuration management.

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Database the setup binary always targets, whatever `DB_NAME` says.
pub const SETUP_DATABASE: &str = "soe";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Sample-data configuration.
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Loads every section from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Ok(Self {
            database: DatabaseConfig::load()?,
            seed: SeedConfig::load()?,
        })
    }
}

/// Database connection configuration.
///
/// Read from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Server host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Login role.
    #[serde(default = "default_user")]
    pub user: String,
    /// Login password.
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    SETUP_DATABASE.to_string()
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_password() -> String {
    "postgres".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            name: default_name(),
            user: default_user(),
            password: default_password(),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl DatabaseConfig {
    /// Loads the connection settings from `DB_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("DB"))
            .build()?
            .try_deserialize()
    }

    /// Returns a copy targeting another database.
    #[must_use]
    pub fn with_database(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Builds typed Postgres connect options.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

/// Sample-data generator configuration.
///
/// Read from `SEED_BENEFICIARIES`, `SEED_REMINDER_LIMIT` and `SEED_RNG_SEED`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Number of synthetic beneficiaries (and therefore cases).
    #[serde(default = "default_beneficiaries")]
    pub beneficiaries: usize,
    /// Number of leading events that receive a reminder.
    #[serde(default = "default_reminder_limit")]
    pub reminder_limit: usize,
    /// Fixed random seed. A fresh one is drawn when unset.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_beneficiaries() -> usize {
    20
}

fn default_reminder_limit() -> usize {
    10
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            beneficiaries: default_beneficiaries(),
            reminder_limit: default_reminder_limit(),
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Loads the generator settings from `SEED_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("SEED"))
            .build()?
            .try_deserialize()
    }
}
