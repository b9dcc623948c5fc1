//! Property-based tests for the synthetic generator.
//!
//! Case codes in a batch are distinct and numbered without gaps, and every
//! generated value stays inside the windows the schema's consumers expect.

use std::collections::HashSet;

use chrono::{NaiveDate, Timelike};
use proptest::prelude::*;

use super::synthetic::{BUSINESS_HOURS, EVENT_WINDOW_DAYS, REMINDER_WINDOW_DAYS};
use super::{SeedSource, SyntheticGenerator, SyntheticOptions};
use crate::case_code::CaseNumbering;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_case_codes_are_one_to_n(seed in any::<u64>(), n in 1usize..=120) {
        let options = SyntheticOptions { beneficiaries: n, ..SyntheticOptions::new(today()) };
        let mut generator = SyntheticGenerator::seeded(options, seed).unwrap();

        let beneficiaries = generator.beneficiaries();
        prop_assert_eq!(beneficiaries.len(), n);

        let ids: Vec<i32> = (1..).take(n).collect();
        let cases = generator.cases(&ids, &mut CaseNumbering::new()).unwrap();
        prop_assert_eq!(cases.len(), n);

        let sequences: Vec<u16> = cases.iter().map(|c| c.case_code.sequence()).collect();
        let expected: Vec<u16> = (1..).take(n).collect();
        prop_assert_eq!(sequences, expected);

        let distinct: HashSet<String> = cases.iter().map(|c| c.case_code.to_string()).collect();
        prop_assert_eq!(distinct.len(), n);
    }

    #[test]
    fn prop_organizations_sampled_without_replacement(seed in any::<u64>()) {
        let mut generator = SyntheticGenerator::seeded(SyntheticOptions::new(today()), seed).unwrap();
        let ids: Vec<i32> = (1..=20).collect();
        for case in generator.cases(&ids, &mut CaseNumbering::new()).unwrap() {
            let distinct: HashSet<&String> = case.organizations.iter().collect();
            prop_assert_eq!(distinct.len(), case.organizations.len());
            prop_assert!((1..=3).contains(&case.organizations.len()));
        }
    }

    #[test]
    fn prop_events_and_reminders_in_window(seed in any::<u64>(), cases in 1usize..=30, limit in 0usize..=15) {
        let options = SyntheticOptions { reminder_limit: limit, ..SyntheticOptions::new(today()) };
        let mut generator = SyntheticGenerator::seeded(options, seed).unwrap();
        let case_ids: Vec<i32> = (1..).take(cases).collect();

        let events = generator.events(&case_ids);
        prop_assert!(events.len() >= cases && events.len() <= cases * 4);
        for event in &events {
            prop_assert!(EVENT_WINDOW_DAYS.contains(&(event.event_date - today()).num_days()));
            let time = event.event_time.unwrap();
            prop_assert!(BUSINESS_HOURS.contains(&time.hour()));
            prop_assert!(time.minute() == 0 || time.minute() == 30);
        }

        let event_ids: Vec<i32> = (1..).take(events.len()).collect();
        let reminders = generator.reminders(&event_ids);
        prop_assert_eq!(reminders.len(), limit.min(events.len()));
        for reminder in &reminders {
            let ahead = u64::try_from((reminder.send_date - today()).num_days()).unwrap();
            prop_assert!(REMINDER_WINDOW_DAYS.contains(&ahead));
        }
    }
}
