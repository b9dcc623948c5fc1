//! Case code error types.

use thiserror::Error;

/// Case code errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseCodeError {
    /// Sequence is zero or does not fit in three digits.
    #[error("Case sequence out of range (1-999): {0}")]
    SequenceOutOfRange(u32),

    /// Year is negative or wider than four digits.
    #[error("Case year out of range (0-9999): {0}")]
    YearOutOfRange(i32),

    /// Every sequence number for the year has been issued.
    #[error("No case codes left for year {0}")]
    Exhausted(i32),

    /// Text is not of the form `PACE-<year>-<sequence>`.
    #[error("Malformed case code: {0}")]
    Malformed(String),
}
