use super::*;

use chrono::TimeZone;

#[test]
fn format_reg_date_shifts_to_registration_zone() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 15).unwrap();
    assert_eq!(format_reg_date(at), "2024-03-01 15:30:15");
}

#[test]
fn format_reg_date_rolls_over_midnight() {
    let at = Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap();
    assert_eq!(format_reg_date(at), "2024-01-01 05:00:00");
}

#[test]
fn format_reg_date_is_nineteen_chars() {
    let at = Utc.with_ymd_and_hms(2025, 7, 9, 0, 0, 1).unwrap();
    assert_eq!(format_reg_date(at).len(), 19);
}
