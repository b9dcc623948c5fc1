//! Domain logic for the PACE case-management database tools.
//!
//! This crate contains pure logic with ZERO database dependencies.
//! The closed value sets, case codes and sample-data planning live here.
//!
//! # Modules
//!
//! - `records` - Rows written by the seed pipeline and their enumerations
//! - `case_code` - `PACE-<year>-<sequence>` codes and their allocation
//! - `seed` - Seed sources: the minimal fixture and the synthetic generator

pub mod case_code;
pub mod records;
pub mod seed;

pub use case_code::{CaseCode, CaseCodeError, CaseNumbering};
pub use seed::{MinimalFixture, SeedPlanError, SeedSource, SyntheticGenerator, SyntheticOptions};
