//! Fixed fixture written by the setup tool.
//!
//! Two accounts, four beneficiaries, and one case and one upcoming event per
//! beneficiary. Values are literal so that a fresh database always looks the
//! same.

use super::{DEV_ADMIN_EMAIL, DEV_PASSWORD_HASH, SeedSource, clock, date};
use crate::case_code::{CaseCode, CaseCodeError, CaseNumbering};
use crate::records::{
    CaseStatus, NewBeneficiary, NewCase, NewEvent, NewReminder, NewUser, UserRole,
};

/// Year carried by the fixture's literal case codes.
pub const FIXTURE_YEAR: i32 = 2024;

/// The four-case development fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalFixture;

struct CaseRow {
    case_type: &'static str,
    title: &'static str,
    resolution: &'static str,
    court: &'static str,
    organizations: &'static [&'static str],
    status: CaseStatus,
    notes: &'static str,
}

const CASES: [CaseRow; 4] = [
    CaseRow {
        case_type: "Domestic Violence",
        title: "Domestic Violence case for Priya Sharma",
        resolution: "Legal Aid",
        court: "Family Court",
        organizations: &["PACE Foundation", "Women's Commission"],
        status: CaseStatus::Active,
        notes: "Active domestic violence case requiring immediate attention",
    },
    CaseRow {
        case_type: "Property Dispute",
        title: "Property dispute case for Rajesh Kumar",
        resolution: "Litigation",
        court: "District Court Delhi",
        organizations: &["PACE Foundation", "Legal Aid Society"],
        status: CaseStatus::Pending,
        notes: "Property ownership dispute case",
    },
    CaseRow {
        case_type: "Child Custody",
        title: "Child custody case for Sunita Devi",
        resolution: "Mediation",
        court: "Family Court",
        organizations: &["PACE Foundation", "Child Welfare Board"],
        status: CaseStatus::Urgent,
        notes: "Urgent child custody matter",
    },
    CaseRow {
        case_type: "Labor Rights",
        title: "Employment rights case for Amit Patel",
        resolution: "Arbitration",
        court: "Labor Court",
        organizations: &["PACE Foundation"],
        status: CaseStatus::Active,
        notes: "Workplace discrimination case",
    },
];

fn beneficiary(
    name: &str,
    contact: &str,
    email: &str,
    address: &str,
    filed: (i32, u32, u32),
    has_smartphone: bool,
    can_read: bool,
) -> NewBeneficiary {
    NewBeneficiary {
        name: name.to_string(),
        contact_number: Some(contact.to_string()),
        email: Some(email.to_string()),
        address: Some(address.to_string()),
        date_of_filing: date(filed.0, filed.1, filed.2),
        has_smartphone,
        can_read,
    }
}

fn event(
    case_id: i32,
    event_type: &str,
    title: &str,
    day: u32,
    hour: u32,
    location: &str,
    description: &str,
) -> NewEvent {
    NewEvent {
        case_id,
        event_type: event_type.to_string(),
        event_title: title.to_string(),
        event_date: date(FIXTURE_YEAR, 12, day),
        event_time: Some(clock(hour, 0)),
        location: Some(location.to_string()),
        description: Some(description.to_string()),
        event_status: None,
        google_drive_url: None,
    }
}

impl SeedSource for MinimalFixture {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn users(&mut self) -> Vec<NewUser> {
        vec![
            NewUser {
                name: "Admin User".to_string(),
                email: DEV_ADMIN_EMAIL.to_string(),
                password_hash: DEV_PASSWORD_HASH.to_string(),
                role: UserRole::Admin,
            },
            NewUser {
                name: "Staff Member".to_string(),
                email: "staff@pace.org".to_string(),
                password_hash: DEV_PASSWORD_HASH.to_string(),
                role: UserRole::Staff,
            },
        ]
    }

    fn beneficiaries(&mut self) -> Vec<NewBeneficiary> {
        vec![
            beneficiary(
                "Priya Sharma",
                "9876543210",
                "priya.sharma@example.com",
                "123 MG Road, Delhi",
                (2024, 1, 15),
                true,
                true,
            ),
            beneficiary(
                "Rajesh Kumar",
                "9876543211",
                "rajesh.kumar@example.com",
                "456 Gandhi Nagar, Delhi",
                (2024, 2, 20),
                false,
                true,
            ),
            beneficiary(
                "Sunita Devi",
                "9876543212",
                "sunita.devi@example.com",
                "789 Park Street, Delhi",
                (2024, 3, 10),
                true,
                false,
            ),
            beneficiary(
                "Amit Patel",
                "9876543213",
                "amit.patel@example.com",
                "321 Main Road, Delhi",
                (2024, 4, 5),
                true,
                true,
            ),
        ]
    }

    fn cases(
        &mut self,
        beneficiary_ids: &[i32],
        _numbering: &mut CaseNumbering,
    ) -> Result<Vec<NewCase>, CaseCodeError> {
        CASES
            .iter()
            .zip(beneficiary_ids)
            .zip(1u32..)
            .map(|((row, &beneficiary_id), sequence)| -> Result<NewCase, CaseCodeError> {
                Ok(NewCase {
                    case_code: CaseCode::new(FIXTURE_YEAR, sequence)?,
                    beneficiary_id,
                    case_type: row.case_type.to_string(),
                    case_title: row.title.to_string(),
                    case_resolution_type: Some(row.resolution.to_string()),
                    court: Some(row.court.to_string()),
                    organizations: row.organizations.iter().map(ToString::to_string).collect(),
                    status: row.status,
                    notes: Some(row.notes.to_string()),
                    google_drive_url: None,
                })
            })
            .collect()
    }

    fn events(&mut self, case_ids: &[i32]) -> Vec<NewEvent> {
        let id = |i: usize| case_ids.get(i).copied();
        [
            id(0).map(|c| {
                event(
                    c,
                    "Court Hearing",
                    "Initial hearing for domestic violence case",
                    15,
                    10,
                    "Family Court Room 1",
                    "First hearing scheduled",
                )
            }),
            id(1).map(|c| {
                event(
                    c,
                    "Document Submission",
                    "Property documents submission",
                    10,
                    14,
                    "District Court",
                    "Submit property ownership documents",
                )
            }),
            id(2).map(|c| {
                event(
                    c,
                    "Mediation Meeting",
                    "Child custody mediation session",
                    20,
                    11,
                    "Mediation Center",
                    "Custody mediation with both parties",
                )
            }),
            id(3).map(|c| {
                event(
                    c,
                    "Client Meeting",
                    "Initial consultation with client",
                    8,
                    16,
                    "PACE Office",
                    "Discuss employment discrimination case",
                )
            }),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn reminders(&mut self, _event_ids: &[i32]) -> Vec<NewReminder> {
        Vec::new()
    }
}
