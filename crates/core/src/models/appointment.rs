use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::datetime::{self, DisplayDateFormat, serde_date, serde_time};

/// Identifier assigned by the persistence API.
///
/// The API may hand out numeric or string ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawAppointmentId", into = "String")]
pub struct AppointmentId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAppointmentId {
    Number(i64),
    Text(String),
}

impl AppointmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawAppointmentId> for AppointmentId {
    fn from(raw: RawAppointmentId) -> Self {
        match raw {
            RawAppointmentId::Number(id) => Self(id.to_string()),
            RawAppointmentId::Text(id) => Self(id),
        }
    }
}

impl From<AppointmentId> for String {
    fn from(id: AppointmentId) -> Self {
        id.0
    }
}

impl From<i64> for AppointmentId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for AppointmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A booked (or about to be booked) appointment in canonical form.
///
/// Serializes with `date` as `YYYY-MM-DD` and `time` as `HH:MM:SS`. Records
/// coming back from the API may use any accepted date or time shape; extra
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AppointmentId>,
    pub title: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub time: NaiveTime,
}

impl Appointment {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Whether this appointment holds the exact `(date, time)` slot.
    pub fn occupies(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date == date && self.time == time
    }

    /// Body for a create or update call.
    pub fn payload(&self) -> AppointmentPayload {
        AppointmentPayload {
            title: self.title.clone(),
            date: self.date,
            time: self.time,
        }
    }

    /// Card fields for listing an appointment to a user.
    pub fn display(&self, format: DisplayDateFormat) -> DisplayAppointment {
        DisplayAppointment {
            id: self.id.clone(),
            title: self.title.clone(),
            date: format.format(self.date),
            time: datetime::format_twelve_hour(self.time),
        }
    }
}

/// Raw booking form input, not yet parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCandidate {
    #[serde(default)]
    pub id: Option<AppointmentId>,
    pub title: String,
    pub date: String,
    pub time: String,
}

impl AppointmentCandidate {
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Marks the candidate as an edit of an existing appointment.
    pub fn with_id(mut self, id: impl Into<AppointmentId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Create/update request body expected by the persistence API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub title: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAppointment {
    pub id: Option<AppointmentId>,
    pub title: String,
    pub date: String,
    pub time: String,
}
