//! Randomized sample-data generator.
//!
//! Every random draw comes from the generator's own `Rng`, and "today" is an
//! option rather than the wall clock, so a fixed seed and date reproduce the
//! same rows.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, TimeDelta};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::vocab::{
    CASE_RESOLUTION_TYPES, CASE_TYPES, CITY, COURTS, DRIVE_FOLDER_URL, EVENT_TYPES, LOCATIONS,
    ORGANIZATIONS, SAMPLE_NAMES, STREETS,
};
use super::{DEV_ADMIN_EMAIL, DEV_PASSWORD_HASH, SeedPlanError, SeedSource, clock};
use crate::case_code::{CaseCodeError, CaseNumbering, MAX_SEQUENCE};
use crate::records::{
    CaseStatus, EventStatus, NewBeneficiary, NewCase, NewEvent, NewReminder, NewUser,
    ReminderMethod, ReminderStatus, UserRole,
};

const CASE_STATUSES: [CaseStatus; 4] = [
    CaseStatus::Active,
    CaseStatus::Pending,
    CaseStatus::Urgent,
    CaseStatus::Resolved,
];

const EVENT_STATUSES: [EventStatus; 3] = [
    EventStatus::Scheduled,
    EventStatus::Completed,
    EventStatus::Cancelled,
];

const REMINDER_METHODS: [ReminderMethod; 4] = [
    ReminderMethod::Sms,
    ReminderMethod::Whatsapp,
    ReminderMethod::VoiceNote,
    ReminderMethod::ManualCall,
];

const REMINDER_STATUSES: [ReminderStatus; 3] = [
    ReminderStatus::Pending,
    ReminderStatus::Sent,
    ReminderStatus::Failed,
];

/// Days before `today` a filing date may fall.
pub const FILING_WINDOW_DAYS: RangeInclusive<u64> = 1..=365;
/// Days relative to `today` an event may fall.
pub const EVENT_WINDOW_DAYS: RangeInclusive<i64> = -30..=60;
/// Days after `today` a reminder may be sent.
pub const REMINDER_WINDOW_DAYS: RangeInclusive<u64> = 1..=14;
/// Hours of the day events and reminders are scheduled in.
pub const BUSINESS_HOURS: RangeInclusive<u32> = 9..=17;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticOptions {
    /// Number of beneficiaries, and so of cases.
    pub beneficiaries: usize,
    /// How many events each case gets.
    pub events_per_case: RangeInclusive<u32>,
    /// Only the first this-many events get a reminder.
    pub reminder_limit: usize,
    /// Date all relative dates are computed from. Its year numbers the cases.
    pub today: NaiveDate,
}

impl SyntheticOptions {
    /// Twenty beneficiaries, one to four events per case, ten reminders.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            beneficiaries: SAMPLE_NAMES.len(),
            events_per_case: 1..=4,
            reminder_limit: 10,
            today,
        }
    }

    /// Checks the options can produce a valid batch.
    pub fn validate(&self) -> Result<(), SeedPlanError> {
        if self.beneficiaries == 0 || self.beneficiaries > usize::from(MAX_SEQUENCE) {
            return Err(SeedPlanError::InvalidBeneficiaryCount(self.beneficiaries));
        }
        let (start, end) = (*self.events_per_case.start(), *self.events_per_case.end());
        if start == 0 || start > end {
            return Err(SeedPlanError::InvalidEventRange { start, end });
        }
        Ok(())
    }
}

/// Seed source drawing values from fixed vocabularies.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator<R = ChaCha8Rng> {
    options: SyntheticOptions,
    rng: R,
}

impl SyntheticGenerator<ChaCha8Rng> {
    /// Creates a generator whose output is fully determined by `seed`.
    pub fn seeded(options: SyntheticOptions, seed: u64) -> Result<Self, SeedPlanError> {
        Self::new(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(options: SyntheticOptions, rng: R) -> Result<Self, SeedPlanError> {
        options.validate()?;
        Ok(Self { options, rng })
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> &SyntheticOptions {
        &self.options
    }

    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.random_range(0..pool.len())]
    }

    fn days_from_today(&self, offset: i64) -> NaiveDate {
        self.options
            .today
            .checked_add_signed(TimeDelta::days(offset))
            .unwrap_or(self.options.today)
    }

    fn days_ago(&self, days: u64) -> NaiveDate {
        self.options
            .today
            .checked_sub_days(Days::new(days))
            .unwrap_or(self.options.today)
    }

    fn beneficiary(&mut self, name: &str) -> NewBeneficiary {
        let contact = format!("+91{}", self.rng.random_range(7_000_000_000u64..=9_999_999_999));
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let street = self.pick(&STREETS);
        let address = format!("{} {street}, {CITY}", self.rng.random_range(1..=999));
        let filed = self.rng.random_range(FILING_WINDOW_DAYS);

        NewBeneficiary {
            name: name.to_string(),
            contact_number: Some(contact),
            email: Some(email),
            address: Some(address),
            date_of_filing: self.days_ago(filed),
            has_smartphone: self.rng.random_bool(0.5),
            can_read: self.rng.random_bool(0.5),
        }
    }

    fn case(
        &mut self,
        beneficiary_id: i32,
        numbering: &mut CaseNumbering,
    ) -> Result<NewCase, CaseCodeError> {
        let case_code = numbering.next(self.options.today.year())?;
        let case_type = self.pick(&CASE_TYPES);
        let org_count = self.rng.random_range(1..=3);
        let organizations = ORGANIZATIONS
            .choose_multiple(&mut self.rng, org_count)
            .map(ToString::to_string)
            .collect();

        Ok(NewCase {
            case_code,
            beneficiary_id,
            case_type: case_type.to_string(),
            case_title: format!("{case_type} case for beneficiary {beneficiary_id}"),
            case_resolution_type: Some(self.pick(&CASE_RESOLUTION_TYPES).to_string()),
            court: Some(self.pick(&COURTS).to_string()),
            organizations,
            status: self.pick(&CASE_STATUSES),
            notes: Some(format!("Sample notes for case {case_code}")),
            google_drive_url: Some(format!("{DRIVE_FOLDER_URL}/sample_{case_code}")),
        })
    }

    fn event(&mut self, case_id: i32) -> NewEvent {
        let event_type = self.pick(&EVENT_TYPES);
        let offset = self.rng.random_range(EVENT_WINDOW_DAYS);
        let hour = self.rng.random_range(BUSINESS_HOURS);
        let minute = self.pick(&[0, 30]);

        NewEvent {
            case_id,
            event_type: event_type.to_string(),
            event_title: format!("{event_type} for case {case_id}"),
            event_date: self.days_from_today(offset),
            event_time: Some(clock(hour, minute)),
            location: Some(self.pick(&LOCATIONS).to_string()),
            description: Some(format!("Scheduled {} session", event_type.to_lowercase())),
            event_status: Some(self.pick(&EVENT_STATUSES)),
            google_drive_url: Some(format!("{DRIVE_FOLDER_URL}/event_{case_id}")),
        }
    }

    fn reminder(&mut self, case_event_id: i32) -> NewReminder {
        let days = self.rng.random_range(REMINDER_WINDOW_DAYS);
        let send_date = self
            .options
            .today
            .checked_add_days(Days::new(days))
            .unwrap_or(self.options.today);

        NewReminder {
            case_event_id,
            send_date,
            send_time: clock(self.rng.random_range(BUSINESS_HOURS), 0),
            method: self.pick(&REMINDER_METHODS),
            status: self.pick(&REMINDER_STATUSES),
        }
    }
}

impl<R: Rng> SeedSource for SyntheticGenerator<R> {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn users(&mut self) -> Vec<NewUser> {
        let user = |name: &str, email: &str, role| NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: DEV_PASSWORD_HASH.to_string(),
            role,
        };
        vec![
            user("Admin User", DEV_ADMIN_EMAIL, UserRole::Admin),
            user("Staff Member 1", "staff1@pace.org", UserRole::Staff),
            user("Staff Member 2", "staff2@pace.org", UserRole::Staff),
        ]
    }

    fn beneficiaries(&mut self) -> Vec<NewBeneficiary> {
        (0..self.options.beneficiaries)
            .map(|i| self.beneficiary(SAMPLE_NAMES[i % SAMPLE_NAMES.len()]))
            .collect()
    }

    fn cases(
        &mut self,
        beneficiary_ids: &[i32],
        numbering: &mut CaseNumbering,
    ) -> Result<Vec<NewCase>, CaseCodeError> {
        beneficiary_ids
            .iter()
            .map(|&id| self.case(id, numbering))
            .collect()
    }

    fn events(&mut self, case_ids: &[i32]) -> Vec<NewEvent> {
        let mut events = Vec::new();
        for &case_id in case_ids {
            let count = self.rng.random_range(self.options.events_per_case.clone());
            for _ in 0..count {
                events.push(self.event(case_id));
            }
        }
        events
    }

    fn reminders(&mut self, event_ids: &[i32]) -> Vec<NewReminder> {
        event_ids
            .iter()
            .take(self.options.reminder_limit)
            .map(|&id| self.reminder(id))
            .collect()
    }
}
