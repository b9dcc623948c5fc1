//! The seed source abstraction.

use crate::case_code::{CaseCodeError, CaseNumbering};
use crate::records::{
    CaseRef, NewBeneficiary, NewBeneficiaryCase, NewCase, NewEvent, NewReminder, NewUser,
};

/// Supplies the rows for each seed stage.
///
/// Stages are called in dependency order, each with the ids returned by the
/// database for the rows of the stage before it, in insertion order.
pub trait SeedSource {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Operator accounts. Emails that already exist are skipped on insert.
    fn users(&mut self) -> Vec<NewUser>;

    /// Beneficiaries.
    fn beneficiaries(&mut self) -> Vec<NewBeneficiary>;

    /// Cases for the inserted beneficiaries.
    ///
    /// `numbering` already knows every stored code; sources that derive codes
    /// must take them from it.
    fn cases(
        &mut self,
        beneficiary_ids: &[i32],
        numbering: &mut CaseNumbering,
    ) -> Result<Vec<NewCase>, CaseCodeError>;

    /// Junction rows for the inserted cases. Defaults to one primary link per case.
    fn links(&mut self, cases: &[CaseRef]) -> Vec<NewBeneficiaryCase> {
        cases.iter().copied().map(NewBeneficiaryCase::primary).collect()
    }

    /// Events for the inserted cases.
    fn events(&mut self, case_ids: &[i32]) -> Vec<NewEvent>;

    /// Reminders for the inserted events.
    fn reminders(&mut self, event_ids: &[i32]) -> Vec<NewReminder>;
}
