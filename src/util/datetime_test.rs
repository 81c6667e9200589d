use super::*;
use chrono::{FixedOffset, NaiveDate, Utc};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
}

// =============================================================
// to_date_time
// =============================================================

#[test]
fn epoch_with_default_format() {
    assert_eq!(to_date_time(0.0, None, &Utc).unwrap(), "1970-01-01 00:00");
}

#[test]
fn empty_format_uses_default() {
    assert_eq!(to_date_time(0.0, Some(""), &Utc).unwrap(), "1970-01-01 00:00");
}

#[test]
fn timezone_offset_shifts_fields() {
    let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
    assert_eq!(to_date_time(0.0, None, &east8).unwrap(), "1970-01-01 08:00");
}

#[test]
fn fractional_seconds_are_truncated() {
    assert_eq!(to_date_time(59.999, Some("ss"), &Utc).unwrap(), "59");
}

#[test]
fn non_finite_timestamp_is_rejected() {
    assert!(matches!(to_date_time(f64::NAN, None, &Utc), Err(DateFormatError::OutOfRange(_))));
    assert!(to_date_time(f64::INFINITY, None, &Utc).is_err());
}

#[test]
fn huge_timestamp_is_rejected() {
    assert!(to_date_time(1e18, None, &Utc).is_err());
}

// =============================================================
// render
// =============================================================

#[test]
fn padded_and_unpadded_tokens() {
    let dt = at(2014, 3, 7, 9, 5, 4);
    assert_eq!(render(&dt, "yyyy-MM-dd hh:mm:ss"), "2014-03-07 09:05:04");
    assert_eq!(render(&dt, "yy/M/d h:m:s"), "14/3/7 9:5:4");
}

#[test]
fn two_digit_values_are_not_padded_further() {
    let dt = at(2013, 12, 25, 23, 59, 58);
    assert_eq!(render(&dt, "MM-dd hh:mm:ss"), "12-25 23:59:58");
}

#[test]
fn am_pm_boundary_is_noon() {
    assert_eq!(render(&at(2014, 1, 1, 11, 59, 59), "a"), "AM");
    assert_eq!(render(&at(2014, 1, 1, 12, 0, 0), "a"), "PM");
    assert_eq!(render(&at(2014, 1, 1, 0, 0, 0), "h a"), "0 AM");
}

#[test]
fn year_modulo_keeps_single_digit() {
    assert_eq!(render(&at(2005, 1, 1, 0, 0, 0), "yy"), "5");
}

#[test]
fn unknown_letter_runs_pass_through() {
    let dt = at(2014, 3, 7, 9, 5, 4);
    assert_eq!(render(&dt, "yyyyMM"), "yyyyMM");
    assert_eq!(render(&dt, "at hh"), "at 09");
    assert_eq!(render(&dt, "yyyy年M月d日"), "2014年3月7日");
}

#[test]
fn empty_pattern_renders_empty() {
    assert_eq!(render(&at(2014, 3, 7, 9, 5, 4), ""), "");
}

// =============================================================
// to_iso_string
// =============================================================

#[test]
fn iso_string_is_utc_with_millis() {
    assert_eq!(to_iso_string(0.0).unwrap(), "1970-01-01T00:00:00.000Z");
    assert_eq!(to_iso_string(1_400_000_000.25).unwrap(), "2014-05-13T16:53:20.250Z");
}

#[test]
fn iso_string_rejects_non_finite() {
    assert!(to_iso_string(f64::NAN).is_err());
}
