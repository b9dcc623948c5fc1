use rstest::rstest;

use super::*;

#[test]
fn test_display_pads_sequence() {
    assert_eq!(CaseCode::new(2024, 1).unwrap().to_string(), "PACE-2024-001");
    assert_eq!(CaseCode::new(2024, 42).unwrap().to_string(), "PACE-2024-042");
    assert_eq!(CaseCode::new(2026, 999).unwrap().to_string(), "PACE-2026-999");
}

#[rstest]
#[case(0)]
#[case(1000)]
#[case(u32::MAX)]
fn test_sequence_out_of_range(#[case] sequence: u32) {
    assert_eq!(
        CaseCode::new(2024, sequence),
        Err(CaseCodeError::SequenceOutOfRange(sequence))
    );
}

#[test]
fn test_year_out_of_range() {
    assert_eq!(
        CaseCode::new(10_000, 1),
        Err(CaseCodeError::YearOutOfRange(10_000))
    );
    assert_eq!(CaseCode::new(-1, 1), Err(CaseCodeError::YearOutOfRange(-1)));
}

#[test]
fn test_parse_valid() {
    let code: CaseCode = "PACE-2024-017".parse().unwrap();
    assert_eq!(code.year(), 2024);
    assert_eq!(code.sequence(), 17);
}

#[rstest]
#[case("")]
#[case("PACE-2024-17")]
#[case("PACE-2024-0017")]
#[case("PACE-2024-000")]
#[case("pace-2024-001")]
#[case("PACE2024-001")]
#[case("PACE-20245-001")]
#[case("PACE--001")]
#[case("PACE-2024-+01")]
#[case("CASE-2024-001")]
fn test_parse_rejects(#[case] raw: &str) {
    assert!(raw.parse::<CaseCode>().is_err(), "{raw} should not parse");
}

#[test]
fn test_codes_order_by_year_then_sequence() {
    let a = CaseCode::new(2024, 999).unwrap();
    let b = CaseCode::new(2025, 1).unwrap();
    let c = CaseCode::new(2025, 2).unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_numbering_starts_at_one() {
    let mut numbering = CaseNumbering::new();
    let codes: Vec<String> = (0..3)
        .map(|_| numbering.next(2026).unwrap().to_string())
        .collect();
    assert_eq!(codes, ["PACE-2026-001", "PACE-2026-002", "PACE-2026-003"]);
}

#[test]
fn test_numbering_continues_after_stored_codes() {
    let mut numbering = CaseNumbering::from_codes([
        "PACE-2026-004",
        "PACE-2026-002",
        "PACE-2025-050",
        "legacy-code",
    ]);
    assert_eq!(numbering.last_issued(2026), Some(4));
    assert_eq!(numbering.next(2026).unwrap().to_string(), "PACE-2026-005");
    assert_eq!(numbering.next(2025).unwrap().to_string(), "PACE-2025-051");
    assert_eq!(numbering.next(2024).unwrap().to_string(), "PACE-2024-001");
}

#[test]
fn test_numbering_exhausted() {
    let mut numbering = CaseNumbering::from_codes(["PACE-2026-999"]);
    assert_eq!(numbering.next(2026), Err(CaseCodeError::Exhausted(2026)));
    assert_eq!(numbering.last_issued(2026), Some(999));
}
