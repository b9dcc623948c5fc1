//! Seed planning error types.

use thiserror::Error;

use crate::case_code::CaseCodeError;

/// Errors raised while configuring or running a seed source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedPlanError {
    /// Beneficiary count is zero or exceeds the three-digit case sequence.
    #[error("Beneficiary count must be between 1 and 999: {0}")]
    InvalidBeneficiaryCount(usize),

    /// Events-per-case range is empty or allows zero events.
    #[error("Events per case must be a non-empty range starting at 1 or more: {start}..={end}")]
    InvalidEventRange {
        /// Lower bound.
        start: u32,
        /// Upper bound.
        end: u32,
    },

    /// A case code could not be issued.
    #[error(transparent)]
    CaseCode(#[from] CaseCodeError),
}
