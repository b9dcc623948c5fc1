//! Allocation of case codes.

use std::collections::BTreeMap;

use super::error::CaseCodeError;
use super::types::{CaseCode, MAX_SEQUENCE};

/// Hands out the next unused case code for a year.
///
/// Seeded from the codes already stored so that a second run continues the
/// sequence instead of colliding with the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseNumbering {
    last: BTreeMap<i32, u16>,
}

impl CaseNumbering {
    /// Starts numbering from an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts numbering after the highest stored code of each year.
    ///
    /// Codes that do not parse are ignored.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut numbering = Self::new();
        for code in codes {
            if let Ok(code) = code.as_ref().parse::<CaseCode>() {
                numbering.observe(code);
            }
        }
        numbering
    }

    /// Records a code as taken.
    pub fn observe(&mut self, code: CaseCode) {
        let last = self.last.entry(code.year()).or_insert(0);
        *last = (*last).max(code.sequence());
    }

    /// Highest sequence issued or observed for the year.
    #[must_use]
    pub fn last_issued(&self, year: i32) -> Option<u16> {
        self.last.get(&year).copied()
    }

    /// Issues the next code for the year.
    pub fn next(&mut self, year: i32) -> Result<CaseCode, CaseCodeError> {
        let last = self.last_issued(year).unwrap_or(0);
        if last >= MAX_SEQUENCE {
            return Err(CaseCodeError::Exhausted(year));
        }
        let code = CaseCode::new(year, u32::from(last) + 1)?;
        self.observe(code);
        Ok(code)
    }
}
