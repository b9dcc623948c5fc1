//! Conversions from planned rows to `SeaORM` active models.
//!
//! Ids and timestamps stay unset so the database fills them in. An unset
//! event status falls back to the column default.

use pace_core::records::{
    NewBeneficiary, NewBeneficiaryCase, NewCase, NewEvent, NewReminder, NewUser,
};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::{
    beneficiaries, beneficiaries_cases, case_events, cases, reminders, users,
};

impl From<NewUser> for users::ActiveModel {
    fn from(row: NewUser) -> Self {
        Self {
            name: Set(row.name),
            email: Set(row.email),
            password_hash: Set(row.password_hash),
            role: Set(row.role.into()),
            ..Default::default()
        }
    }
}

impl From<NewBeneficiary> for beneficiaries::ActiveModel {
    fn from(row: NewBeneficiary) -> Self {
        Self {
            name: Set(row.name),
            contact_number: Set(row.contact_number),
            email: Set(row.email),
            address: Set(row.address),
            date_of_filing: Set(row.date_of_filing),
            has_smartphone: Set(Some(row.has_smartphone)),
            can_read: Set(Some(row.can_read)),
            ..Default::default()
        }
    }
}

impl From<NewCase> for cases::ActiveModel {
    fn from(row: NewCase) -> Self {
        let organizations = (!row.organizations.is_empty()).then_some(row.organizations);
        Self {
            case_code: Set(row.case_code.to_string()),
            beneficiary_id: Set(row.beneficiary_id),
            case_type: Set(row.case_type),
            case_title: Set(row.case_title),
            case_resolution_type: Set(row.case_resolution_type),
            court: Set(row.court),
            organizations: Set(organizations),
            status: Set(Some(row.status.into())),
            notes: Set(row.notes),
            google_drive_url: Set(row.google_drive_url),
            ..Default::default()
        }
    }
}

impl From<NewBeneficiaryCase> for beneficiaries_cases::ActiveModel {
    fn from(row: NewBeneficiaryCase) -> Self {
        Self {
            beneficiary_id: Set(row.beneficiary_id),
            case_id: Set(row.case_id),
            role: Set(Some(row.role)),
            ..Default::default()
        }
    }
}

impl From<NewEvent> for case_events::ActiveModel {
    fn from(row: NewEvent) -> Self {
        Self {
            case_id: Set(row.case_id),
            event_type: Set(row.event_type),
            event_title: Set(row.event_title),
            event_date: Set(row.event_date),
            event_time: Set(row.event_time),
            location: Set(row.location),
            description: Set(row.description),
            event_status: row
                .event_status
                .map_or(NotSet, |status| Set(Some(status.into()))),
            google_drive_url: Set(row.google_drive_url),
            ..Default::default()
        }
    }
}

impl From<NewReminder> for reminders::ActiveModel {
    fn from(row: NewReminder) -> Self {
        Self {
            case_event_id: Set(row.case_event_id),
            send_date: Set(row.send_date),
            send_time: Set(row.send_time),
            method: Set(row.method.into()),
            status: Set(Some(row.status.into())),
            ..Default::default()
        }
    }
}
