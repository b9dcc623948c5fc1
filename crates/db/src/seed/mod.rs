//! Seed pipeline.
//!
//! Writes the rows planned by a [`SeedSource`] stage by stage inside one
//! transaction: users, beneficiaries, cases with their primary links, events,
//! then reminders. Any failure rolls the whole run back, so either every
//! stage is committed or none is.
//!
//! # Modules
//!
//! - `rows` - Planned rows to active models

mod rows;

use std::collections::HashSet;

use pace_core::records::{CaseRef, NewUser};
use pace_core::{CaseCodeError, CaseNumbering, SeedSource};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, QuerySelect,
    TransactionTrait,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::entities::{
    beneficiaries, beneficiaries_cases, case_events, cases, reminders, users,
};
use crate::schema;

/// Errors that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A statement failed, including unique and check violations.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// No case code could be allocated.
    #[error("Case code error: {0}")]
    CaseCode(#[from] CaseCodeError),

    /// A source supplied a literal case code that is already stored.
    #[error("Case code {0} is already taken")]
    CaseCodeTaken(String),
}

/// Rows written by one seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Name of the seed source.
    pub source: &'static str,
    /// Users inserted; existing emails are not counted.
    pub users: u64,
    /// Beneficiaries inserted.
    pub beneficiaries: usize,
    /// Cases inserted.
    pub cases: usize,
    /// Beneficiary-case links inserted.
    pub links: u64,
    /// Events inserted.
    pub events: usize,
    /// Reminders inserted.
    pub reminders: u64,
    /// Codes of the inserted cases, in insertion order.
    pub case_codes: Vec<String>,
}

/// Seeds an existing schema.
///
/// # Errors
///
/// Returns the first failing stage's error after rolling back.
pub async fn seed<C, S>(db: &C, source: &mut S) -> Result<SeedSummary, SeedError>
where
    C: TransactionTrait,
    S: SeedSource + ?Sized,
{
    let txn = db.begin().await?;
    let result = run_stages(&txn, source).await;
    finish(txn, result).await
}

/// Drops and recreates the schema, then seeds it, all in one transaction.
///
/// DESTRUCTIVE: every existing row is lost.
///
/// # Errors
///
/// Returns the first failing statement's error after rolling back, in which
/// case the previous schema and data are left in place.
pub async fn seed_fresh<C, S>(db: &C, source: &mut S) -> Result<SeedSummary, SeedError>
where
    C: TransactionTrait,
    S: SeedSource + ?Sized,
{
    let txn = db.begin().await?;
    let result = match schema::rebuild(&txn).await {
        Ok(()) => run_stages(&txn, source).await,
        Err(e) => Err(e.into()),
    };
    finish(txn, result).await
}

async fn finish(
    txn: DatabaseTransaction,
    result: Result<SeedSummary, SeedError>,
) -> Result<SeedSummary, SeedError> {
    match result {
        Ok(summary) => {
            txn.commit().await?;
            info!(
                source = summary.source,
                users = summary.users,
                beneficiaries = summary.beneficiaries,
                cases = summary.cases,
                events = summary.events,
                reminders = summary.reminders,
                "Seed committed"
            );
            Ok(summary)
        }
        Err(e) => {
            error!(error = %e, "Seed failed, rolling back");
            if let Err(rollback) = txn.rollback().await {
                warn!(error = %rollback, "Rollback failed");
            }
            Err(e)
        }
    }
}

/// Inserts users, skipping any whose email already exists.
///
/// Returns the number of rows actually inserted.
///
/// # Errors
///
/// Returns an error if the insert fails for any reason other than a
/// duplicate email.
pub async fn insert_users<C: ConnectionTrait>(
    db: &C,
    rows: Vec<NewUser>,
) -> Result<u64, DbErr> {
    if rows.is_empty() {
        return Ok(0);
    }
    users::Entity::insert_many(rows.into_iter().map(users::ActiveModel::from))
        .on_conflict(
            OnConflict::column(users::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
}

/// Runs every stage on `db` without managing a transaction.
///
/// # Errors
///
/// Returns the first failing stage's error. Rows already written are not
/// undone; callers are expected to run this inside a transaction.
pub async fn run_stages<C, S>(db: &C, source: &mut S) -> Result<SeedSummary, SeedError>
where
    C: ConnectionTrait,
    S: SeedSource + ?Sized,
{
    let name = source.name();
    info!(source = name, "Seeding");

    let users = insert_users(db, source.users()).await?;
    info!(inserted = users, "Users seeded");

    let mut beneficiary_ids = Vec::new();
    for row in source.beneficiaries() {
        let model = beneficiaries::ActiveModel::from(row).insert(db).await?;
        beneficiary_ids.push(model.id);
    }
    info!(inserted = beneficiary_ids.len(), "Beneficiaries seeded");

    let stored: Vec<String> = cases::Entity::find()
        .select_only()
        .column(cases::Column::CaseCode)
        .into_tuple()
        .all(db)
        .await?;
    let mut numbering = CaseNumbering::from_codes(&stored);
    let taken: HashSet<String> = stored.into_iter().collect();

    let planned = source.cases(&beneficiary_ids, &mut numbering)?;
    if let Some(case) = planned
        .iter()
        .find(|case| taken.contains(&case.case_code.to_string()))
    {
        return Err(SeedError::CaseCodeTaken(case.case_code.to_string()));
    }

    let mut case_refs = Vec::with_capacity(planned.len());
    let mut case_codes = Vec::with_capacity(planned.len());
    for row in planned {
        let model = cases::ActiveModel::from(row).insert(db).await?;
        case_refs.push(CaseRef {
            id: model.id,
            beneficiary_id: model.beneficiary_id,
        });
        case_codes.push(model.case_code);
    }
    info!(inserted = case_refs.len(), "Cases seeded");

    let links = source.links(&case_refs);
    let links = if links.is_empty() {
        0
    } else {
        beneficiaries_cases::Entity::insert_many(
            links.into_iter().map(beneficiaries_cases::ActiveModel::from),
        )
        .exec_without_returning(db)
        .await?
    };
    info!(inserted = links, "Beneficiary links seeded");

    let case_ids: Vec<i32> = case_refs.iter().map(|case| case.id).collect();
    let mut event_ids = Vec::new();
    for row in source.events(&case_ids) {
        let model = case_events::ActiveModel::from(row).insert(db).await?;
        event_ids.push(model.id);
    }
    info!(inserted = event_ids.len(), "Events seeded");

    let planned = source.reminders(&event_ids);
    let reminders = if planned.is_empty() {
        0
    } else {
        reminders::Entity::insert_many(planned.into_iter().map(reminders::ActiveModel::from))
            .exec_without_returning(db)
            .await?
    };
    info!(inserted = reminders, "Reminders seeded");

    Ok(SeedSummary {
        source: name,
        users,
        beneficiaries: beneficiary_ids.len(),
        cases: case_refs.len(),
        links,
        events: event_ids.len(),
        reminders,
        case_codes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pace_core::CaseCode;

    #[test]
    fn test_case_code_taken_message() {
        let code = CaseCode::new(2024, 1).unwrap().to_string();
        let err = SeedError::CaseCodeTaken(code);
        assert_eq!(err.to_string(), "Case code PACE-2024-001 is already taken");
    }

    #[test]
    fn test_case_code_error_converts() {
        let err: SeedError = CaseCodeError::Exhausted(2024).into();
        assert!(matches!(err, SeedError::CaseCode(CaseCodeError::Exhausted(2024))));
    }
}
