//! Shared configuration and errors for the PACE database tools.
//!
//! This crate provides common pieces used by the database layer and binaries:
//! - Connection and seeding configuration
//! - Application-wide error type with process exit codes

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, SETUP_DATABASE, SeedConfig};
pub use error::AppError;
