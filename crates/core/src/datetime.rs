//! # Date and Time Normalization
//!
//! Appointments travel in three shapes: the canonical wire form
//! (`YYYY-MM-DD` / `HH:MM:SS`), whatever a form or calendar widget produced
//! (`02/01/2025`, `9:30 am`, `2025-02-01T15:00:00.000Z`, ...), and display
//! strings (`02-01-2025`, `9:30 AM`).
//!
//! Parsing first detects which recognized format an input is in and then
//! parses strictly for that format. Anything the detector does not recognize
//! is rejected; in particular day-first dates (`DD-MM-YYYY`) are never
//! guessed.
//!
//! Timestamps carrying an offset are converted to UTC before their calendar
//! date is taken, so a date never shifts with the local timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::errors::{SchedulingError, SchedulingResult};

/// Canonical wire format for dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Canonical wire format for times of day
pub const CANONICAL_TIME_FORMAT: &str = "%H:%M:%S";

/// Date representations the parser accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInputFormat {
    /// `2025-02-01`
    IsoDate,
    /// `2025-02-01T10:00`, `2025-02-01 10:00:00.000`
    IsoDateTime,
    /// `2025-02-01T10:00:00Z`, `2025-02-01T10:00:00-05:00`
    Rfc3339,
    /// `02-01-2025`
    MonthDayYear,
    /// `02/01/2025`
    MonthDayYearSlashed,
}

impl DateInputFormat {
    /// Detects the format of `input` from its shape alone.
    pub fn detect(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some((date, rest)) = split_date_time(input) {
            if !is_iso_date_shape(date) || rest.is_empty() {
                return None;
            }
            return if has_utc_offset(rest) {
                Some(Self::Rfc3339)
            } else {
                Some(Self::IsoDateTime)
            };
        }

        if is_iso_date_shape(input) {
            Some(Self::IsoDate)
        } else if is_month_day_year_shape(input, '-') {
            Some(Self::MonthDayYear)
        } else if is_month_day_year_shape(input, '/') {
            Some(Self::MonthDayYearSlashed)
        } else {
            None
        }
    }
}

/// Time representations the parser accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInputFormat {
    /// `9:05`, `09:05`, `09:05:30`
    TwentyFourHour,
    /// `9:05 AM`, `9:05pm`, `9:05:30 PM`
    TwelveHour,
}

impl TimeInputFormat {
    pub fn detect(input: &str) -> Option<Self> {
        let input = input.trim();
        if meridiem_suffix(input).is_some() {
            Some(Self::TwelveHour)
        } else if input.contains(':') {
            Some(Self::TwentyFourHour)
        } else {
            None
        }
    }
}

/// Formats dates may be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayDateFormat {
    /// `MM-DD-YYYY`
    #[default]
    MonthDayYear,
    /// `MM/DD/YYYY`
    MonthDayYearSlashed,
    /// `YYYY-MM-DD`
    Iso,
}

impl DisplayDateFormat {
    /// Looks a format up by its pattern name, e.g. `"MM-DD-YYYY"`.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        match pattern.trim().to_ascii_uppercase().as_str() {
            "MM-DD-YYYY" => Some(Self::MonthDayYear),
            "MM/DD/YYYY" => Some(Self::MonthDayYearSlashed),
            "YYYY-MM-DD" => Some(Self::Iso),
            _ => None,
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM-DD-YYYY",
            Self::MonthDayYearSlashed => "MM/DD/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }

    fn strftime(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m-%d-%Y",
            Self::MonthDayYearSlashed => "%m/%d/%Y",
            Self::Iso => ISO_DATE_FORMAT,
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.strftime()).to_string()
    }
}

/// Parses any recognized date representation into a calendar date.
///
/// # Errors
///
/// Returns [`SchedulingError::UnparseableDate`] if the format is not
/// recognized or the fields do not form a real calendar date.
pub fn parse_date(input: &str) -> SchedulingResult<NaiveDate> {
    let unparseable = || SchedulingError::UnparseableDate {
        input: input.to_string(),
    };
    let trimmed = input.trim();

    let parsed = match DateInputFormat::detect(trimmed).ok_or_else(unparseable)? {
        DateInputFormat::IsoDate => NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).ok(),
        DateInputFormat::IsoDateTime => {
            let normalized = normalize_separator(trimmed);
            NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
                .ok()
                .map(|datetime| datetime.date())
        }
        DateInputFormat::Rfc3339 => DateTime::parse_from_rfc3339(&normalize_separator(trimmed))
            .ok()
            .map(|datetime| datetime.with_timezone(&Utc).date_naive()),
        DateInputFormat::MonthDayYear => NaiveDate::parse_from_str(trimmed, "%m-%d-%Y").ok(),
        DateInputFormat::MonthDayYearSlashed => {
            NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").ok()
        }
    };

    parsed.ok_or_else(unparseable)
}

/// Parses a 12-hour or 24-hour time of day.
///
/// # Errors
///
/// Returns [`SchedulingError::UnparseableTime`] on a missing colon,
/// non-numeric components, out-of-range fields, or a meridiem attached to an
/// hour outside `1..=12`.
pub fn parse_time(input: &str) -> SchedulingResult<NaiveTime> {
    let unparseable = || SchedulingError::UnparseableTime {
        input: input.to_string(),
    };
    let trimmed = input.trim();

    let parsed = match TimeInputFormat::detect(trimmed).ok_or_else(unparseable)? {
        TimeInputFormat::TwentyFourHour => split_clock(trimmed)
            .and_then(|(hour, minute, second)| NaiveTime::from_hms_opt(hour, minute, second)),
        TimeInputFormat::TwelveHour => {
            let (clock, is_pm) = meridiem_suffix(trimmed).ok_or_else(unparseable)?;
            split_clock(clock.trim_end())
                .filter(|(hour, _, _)| (1..=12).contains(hour))
                .and_then(|(hour, minute, second)| {
                    let hour = if is_pm { hour % 12 + 12 } else { hour % 12 };
                    NaiveTime::from_hms_opt(hour, minute, second)
                })
        }
    };

    parsed.ok_or_else(unparseable)
}

/// Canonical `HH:MM:SS` rendering of a time of day.
pub fn format_canonical_time(time: NaiveTime) -> String {
    time.format(CANONICAL_TIME_FORMAT).to_string()
}

/// 12-hour display label such as `9:00 AM`.
///
/// Seconds are included only when non-zero so the label parses back to the
/// same time.
pub fn format_twelve_hour(time: NaiveTime) -> String {
    let period = if time.hour() >= 12 { "PM" } else { "AM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    if time.second() == 0 {
        format!("{}:{:02} {}", hour, time.minute(), period)
    } else {
        format!("{}:{:02}:{:02} {}", hour, time.minute(), time.second(), period)
    }
}

/// Normalizes any accepted time representation to `HH:MM:SS`.
pub fn to_24_hour(input: &str) -> SchedulingResult<String> {
    parse_time(input).map(format_canonical_time)
}

/// Renders any accepted time representation as a 12-hour display label.
pub fn to_12_hour(input: &str) -> SchedulingResult<String> {
    parse_time(input).map(format_twelve_hour)
}

/// Normalizes any accepted date representation to `YYYY-MM-DD`.
pub fn to_iso_date(input: &str) -> SchedulingResult<String> {
    parse_date(input).map(|date| DisplayDateFormat::Iso.format(date))
}

/// Renders any accepted date representation in a display format.
pub fn to_display_date(input: &str, format: DisplayDateFormat) -> SchedulingResult<String> {
    parse_date(input).map(|date| format.format(date))
}

fn split_date_time(input: &str) -> Option<(&str, &str)> {
    input
        .split_once(|c: char| c == 'T' || c == 't' || c == ' ')
        .map(|(date, rest)| (date, rest.trim()))
}

fn normalize_separator(input: &str) -> String {
    match split_date_time(input) {
        Some((date, rest)) => format!("{}T{}", date, rest),
        None => input.to_string(),
    }
}

fn has_utc_offset(time: &str) -> bool {
    time.ends_with(['Z', 'z']) || time.contains(['+', '-'])
}

fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn is_iso_date_shape(input: &str) -> bool {
    let parts: Vec<&str> = input.split('-').collect();
    matches!(parts.as_slice(), [year, month, day]
        if year.len() == 4 && month.len() == 2 && day.len() == 2
            && parts.iter().all(|part| all_digits(part)))
}

fn is_month_day_year_shape(input: &str, separator: char) -> bool {
    let parts: Vec<&str> = input.split(separator).collect();
    matches!(parts.as_slice(), [month, day, year]
        if (1..=2).contains(&month.len()) && (1..=2).contains(&day.len()) && year.len() == 4
            && parts.iter().all(|part| all_digits(part)))
}

/// Splits a trailing `AM`/`PM` marker off, returning the clock part and
/// whether the marker was `PM`.
fn meridiem_suffix(input: &str) -> Option<(&str, bool)> {
    if input.len() < 2 || !input.is_char_boundary(input.len() - 2) {
        return None;
    }
    let (clock, marker) = input.split_at(input.len() - 2);
    if marker.eq_ignore_ascii_case("am") {
        Some((clock, false))
    } else if marker.eq_ignore_ascii_case("pm") {
        Some((clock, true))
    } else {
        None
    }
}

/// `H:MM` or `H:MM:SS[.f]` into numeric fields; hours may have one or two
/// digits, minutes and seconds exactly two. A fractional second is dropped.
fn split_clock(clock: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = clock.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [hour, minute] => (*hour, *minute, "00"),
        [hour, minute, second] => match second.split_once('.') {
            Some((whole, fraction)) if all_digits(fraction) => (*hour, *minute, whole),
            Some(_) => return None,
            None => (*hour, *minute, *second),
        },
        _ => return None,
    };

    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || second.len() != 2 {
        return None;
    }
    if ![hour, minute, second].iter().all(|part| all_digits(part)) {
        return None;
    }

    Some((hour.parse().ok()?, minute.parse().ok()?, second.parse().ok()?))
}

/// Serde adapter writing `YYYY-MM-DD` and reading any accepted date.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{ISO_DATE_FORMAT, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(ISO_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter writing `HH:MM:SS` and reading any accepted time.
pub mod serde_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{CANONICAL_TIME_FORMAT, parse_time};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(CANONICAL_TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter writing 12-hour labels such as `9:30 AM`.
pub mod serde_twelve_hour {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{format_twelve_hour, parse_time};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_twelve_hour(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(de::Error::custom)
    }
}
