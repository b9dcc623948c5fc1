//! The `CaseCode` value type.

use std::fmt;
use std::str::FromStr;

use super::error::CaseCodeError;

/// Fixed prefix of every case code.
pub const CASE_CODE_PREFIX: &str = "PACE";

/// Highest sequence number a three-digit code can carry.
pub const MAX_SEQUENCE: u16 = 999;

/// A validated `PACE-<year>-<sequence>` case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseCode {
    year: i32,
    sequence: u16,
}

impl CaseCode {
    /// Creates a code for the given year and 1-based sequence.
    pub fn new(year: i32, sequence: u32) -> Result<Self, CaseCodeError> {
        if !(0..=9999).contains(&year) {
            return Err(CaseCodeError::YearOutOfRange(year));
        }
        match u16::try_from(sequence) {
            Ok(seq) if (1..=MAX_SEQUENCE).contains(&seq) => Ok(Self {
                year,
                sequence: seq,
            }),
            _ => Err(CaseCodeError::SequenceOutOfRange(sequence)),
        }
    }

    /// Year the code was issued for.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Position within the year, starting at 1.
    #[must_use]
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }
}

impl fmt::Display for CaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CASE_CODE_PREFIX}-{}-{:03}", self.year, self.sequence)
    }
}

impl FromStr for CaseCode {
    type Err = CaseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CaseCodeError::Malformed(s.to_string());

        let rest = s
            .strip_prefix(CASE_CODE_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(malformed)?;
        let (year, sequence) = rest.split_once('-').ok_or_else(malformed)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(year) || year.len() > 4 || sequence.len() != 3 || !all_digits(sequence) {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let sequence: u32 = sequence.parse().map_err(|_| malformed())?;
        Self::new(year, sequence)
    }
}
