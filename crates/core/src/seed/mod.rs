//! Sample-data planning.
//!
//! A seed source produces the rows for each stage of the seed pipeline.
//! Each stage receives the ids the database assigned in the previous one:
//! users, then beneficiaries, then cases (and their primary links), then
//! events, then reminders.
//!
//! # Modules
//!
//! - `source` - The `SeedSource` trait driven by the pipeline
//! - `minimal` - Fixed four-case fixture used by the setup tool
//! - `synthetic` - Randomized generator with an explicit random source
//! - `vocab` - Word pools the generator draws from
//! - `error` - Generator option errors

pub mod error;
pub mod minimal;
pub mod source;
pub mod synthetic;
pub mod vocab;

#[cfg(test)]
mod synthetic_props;

use chrono::{NaiveDate, NaiveTime};

pub use error::SeedPlanError;
pub use minimal::MinimalFixture;
pub use source::SeedSource;
pub use synthetic::{SyntheticGenerator, SyntheticOptions};

/// Bcrypt hash of the development password shared by every seeded account.
pub const DEV_PASSWORD_HASH: &str = "$2b$10$C.csaDkG3SYVVCnTT4nmmutzcz7ttSYccf6wHviszitKkcLT2pFJO";

/// Plain-text development password matching `DEV_PASSWORD_HASH`.
pub const DEV_PASSWORD: &str = "password123";

/// Email of the seeded administrator.
pub const DEV_ADMIN_EMAIL: &str = "admin@pace.org";

/// Calendar date from literal parts. Panics on an impossible date.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Time of day from literal parts. Panics outside 00:00..=23:59.
fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}
