//! `SeaORM` entities, one module per table.

pub mod beneficiaries;
pub mod beneficiaries_cases;
pub mod case_events;
pub mod cases;
pub mod documents;
pub mod reminders;
pub mod sea_orm_active_enums;
pub mod users;
