use appointly_core::datetime::{
    DisplayDateFormat, parse_date, parse_time, to_12_hour, to_24_hour, to_display_date,
    to_iso_date,
};
use appointly_core::errors::SchedulingError;
use chrono::{Duration, NaiveDate, NaiveTime};
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("09:00", "09:00:00")]
#[case("9:00", "09:00:00")]
#[case("14:30:15", "14:30:15")]
#[case("00:00", "00:00:00")]
#[case("9:00 AM", "09:00:00")]
#[case("12:00 AM", "00:00:00")]
#[case("12:30 PM", "12:30:00")]
#[case("1:05 pm", "13:05:00")]
#[case("11:59PM", "23:59:00")]
#[case("10:15:30 PM", "22:15:30")]
#[case("  10:00 AM  ", "10:00:00")]
#[case("09:00:00.000", "09:00:00")]
#[case("14:30:15.123456", "14:30:15")]
fn test_to_24_hour(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_24_hour(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("0900")]
#[case("ab:cd")]
#[case("9:00 XM")]
#[case("10:00 A")]
#[case("13:00 PM")]
#[case("0:30 AM")]
#[case("24:00")]
#[case("9:60")]
#[case("9:5")]
#[case("-1:00")]
#[case("09:00:00.")]
#[case("09:00:00.5x")]
fn test_to_24_hour_rejects_malformed_input(#[case] input: &str) {
    assert_eq!(
        to_24_hour(input),
        Err(SchedulingError::UnparseableTime {
            input: input.to_string()
        })
    );
}

#[rstest]
#[case("00:00:00", "12:00 AM")]
#[case("12:00", "12:00 PM")]
#[case("09:00:00", "9:00 AM")]
#[case("13:45", "1:45 PM")]
#[case("23:59:59", "11:59:59 PM")]
#[case("9:30 am", "9:30 AM")]
fn test_to_12_hour(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_12_hour(input).unwrap(), expected);
}

#[test]
fn test_to_12_hour_rejects_malformed_input() {
    assert_eq!(
        to_12_hour("noon"),
        Err(SchedulingError::UnparseableTime {
            input: "noon".to_string()
        })
    );
}

#[test]
fn test_twelve_hour_round_trip_is_idempotent_for_every_minute() {
    let mut time = NaiveTime::MIN;
    for _ in 0..24 * 60 {
        let canonical = to_24_hour(&time.format("%H:%M").to_string()).unwrap();
        let round_tripped = to_24_hour(&to_12_hour(&canonical).unwrap()).unwrap();
        assert_eq!(round_tripped, canonical);
        time += Duration::minutes(1);
    }
}

#[test]
fn test_twelve_hour_round_trip_keeps_seconds() {
    for _ in 0..200 {
        let hour: u32 = (0..24).fake();
        let minute: u32 = (0..60).fake();
        let second: u32 = (0..60).fake();
        let input = format!("{:02}:{:02}:{:02}", hour, minute, second);

        let canonical = to_24_hour(&input).unwrap();
        assert_eq!(canonical, input);
        assert_eq!(to_24_hour(&to_12_hour(&canonical).unwrap()).unwrap(), canonical);
    }
}

#[rstest]
#[case("2025-02-01", "2025-02-01")]
#[case("02-01-2025", "2025-02-01")]
#[case("02/01/2025", "2025-02-01")]
#[case("2/1/2025", "2025-02-01")]
#[case("2025-02-01T10:00", "2025-02-01")]
#[case("2025-02-01 10:00:00.123", "2025-02-01")]
#[case("2025-02-01T00:00:00.000Z", "2025-02-01")]
#[case("2025-02-01T23:30:00-05:00", "2025-02-02")]
#[case("2025-02-01T01:00:00+02:00", "2025-01-31")]
fn test_to_iso_date(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_iso_date(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("Feb 1 2025")]
#[case("2025/02/01")]
#[case("13-01-2025")]
#[case("31-12-2025")]
#[case("2025-02-30")]
#[case("2025-2-1")]
#[case("2025-02-01T")]
fn test_to_iso_date_fails_closed(#[case] input: &str) {
    assert_eq!(
        to_iso_date(input),
        Err(SchedulingError::UnparseableDate {
            input: input.to_string()
        })
    );
}

#[rstest]
#[case(DisplayDateFormat::MonthDayYear, "02-01-2025")]
#[case(DisplayDateFormat::MonthDayYearSlashed, "02/01/2025")]
#[case(DisplayDateFormat::Iso, "2025-02-01")]
fn test_to_display_date(#[case] format: DisplayDateFormat, #[case] expected: &str) {
    assert_eq!(to_display_date("2025-02-01", format).unwrap(), expected);
}

#[test]
fn test_display_date_never_shifts_utc_midnight() {
    assert_eq!(
        to_display_date("2025-02-01T00:00:00Z", DisplayDateFormat::default()).unwrap(),
        "02-01-2025"
    );
}

#[test]
fn test_display_date_round_trips_to_iso() {
    let formats = [
        DisplayDateFormat::MonthDayYear,
        DisplayDateFormat::MonthDayYearSlashed,
        DisplayDateFormat::Iso,
    ];

    for _ in 0..200 {
        let year: i32 = (1900..2200).fake();
        let ordinal: u32 = (1..366).fake();
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let iso = date.format("%Y-%m-%d").to_string();

        for format in formats {
            let displayed = to_display_date(&iso, format).unwrap();
            assert_eq!(to_iso_date(&displayed).unwrap(), to_iso_date(&iso).unwrap());
        }
    }
}

#[rstest]
#[case("MM-DD-YYYY", Some(DisplayDateFormat::MonthDayYear))]
#[case("mm/dd/yyyy", Some(DisplayDateFormat::MonthDayYearSlashed))]
#[case("YYYY-MM-DD", Some(DisplayDateFormat::Iso))]
#[case("DD-MM-YYYY", None)]
fn test_display_format_from_pattern(
    #[case] pattern: &str,
    #[case] expected: Option<DisplayDateFormat>,
) {
    assert_eq!(DisplayDateFormat::from_pattern(pattern), expected);
    if let Some(format) = expected {
        assert_eq!(
            DisplayDateFormat::from_pattern(format.pattern()),
            Some(format)
        );
    }
}

#[test]
fn test_parse_helpers_return_typed_values() {
    assert_eq!(
        parse_date("02/01/2025").unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    );
    assert_eq!(
        parse_time("3:15 PM").unwrap(),
        NaiveTime::from_hms_opt(15, 15, 0).unwrap()
    );
}
