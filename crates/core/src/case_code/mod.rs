//! Human-readable case codes.
//!
//! A case code has the form `PACE-<year>-<sequence>`, the sequence being a
//! 1-based number zero-padded to three digits and restarting every year.
//!
//! # Modules
//!
//! - `types` - The `CaseCode` value type
//! - `numbering` - Allocation of the next free code for a year
//! - `error` - Parse and range errors

pub mod error;
pub mod numbering;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::CaseCodeError;
pub use numbering::CaseNumbering;
pub use types::{CASE_CODE_PREFIX, CaseCode, MAX_SEQUENCE};
