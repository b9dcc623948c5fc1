//! Rows to be written by the seed pipeline.
//!
//! These are plain values; ids of parent rows are filled in from what the
//! database returned for the previous stage.

pub mod types;

use chrono::{NaiveDate, NaiveTime};

use crate::case_code::CaseCode;

pub use types::{CaseStatus, EventStatus, ReminderMethod, ReminderStatus, UserRole};

/// Role written on the junction row that ties a case to its originating beneficiary.
pub const PRIMARY_ROLE: &str = "primary";

/// A staff or admin account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email, unique across users.
    pub email: String,
    /// Pre-computed password hash.
    pub password_hash: String,
    /// Operator role.
    pub role: UserRole,
}

/// A person receiving case services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeneficiary {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub contact_number: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Date the beneficiary's matter was filed.
    pub date_of_filing: NaiveDate,
    /// Owns a smartphone.
    pub has_smartphone: bool,
    /// Literate.
    pub can_read: bool,
}

/// A legal matter opened for one beneficiary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    /// Human-readable unique code.
    pub case_code: CaseCode,
    /// Originating beneficiary.
    pub beneficiary_id: i32,
    /// Free-form category.
    pub case_type: String,
    /// Title.
    pub case_title: String,
    /// How the matter is being resolved.
    pub case_resolution_type: Option<String>,
    /// Court hearing the matter.
    pub court: Option<String>,
    /// Organizations involved, unordered.
    pub organizations: Vec<String>,
    /// Lifecycle status.
    pub status: CaseStatus,
    /// Notes.
    pub notes: Option<String>,
    /// Link to the case's document folder.
    pub google_drive_url: Option<String>,
}

/// A case as stored, enough to link it back to its beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRef {
    /// Case id.
    pub id: i32,
    /// Originating beneficiary id.
    pub beneficiary_id: i32,
}

/// A beneficiary's participation in a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeneficiaryCase {
    /// Participating beneficiary.
    pub beneficiary_id: i32,
    /// Case participated in.
    pub case_id: i32,
    /// Role in the case.
    pub role: String,
}

impl NewBeneficiaryCase {
    /// Links a case to its originating beneficiary.
    #[must_use]
    pub fn primary(case: CaseRef) -> Self {
        Self {
            beneficiary_id: case.beneficiary_id,
            case_id: case.id,
            role: PRIMARY_ROLE.to_string(),
        }
    }
}

/// A scheduled occurrence on a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Owning case.
    pub case_id: i32,
    /// Kind of event.
    pub event_type: String,
    /// Title.
    pub event_title: String,
    /// Day of the event.
    pub event_date: NaiveDate,
    /// Start time.
    pub event_time: Option<NaiveTime>,
    /// Where it takes place.
    pub location: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Status; the column default applies when `None`.
    pub event_status: Option<EventStatus>,
    /// Link to the event's document folder.
    pub google_drive_url: Option<String>,
}

/// A notification scheduled for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    /// Event reminded about.
    pub case_event_id: i32,
    /// Day to send.
    pub send_date: NaiveDate,
    /// Time to send.
    pub send_time: NaiveTime,
    /// Delivery channel.
    pub method: ReminderMethod,
    /// Delivery status.
    pub status: ReminderStatus,
}
