use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::datetime::{self, serde_twelve_hour};
use crate::models::appointment::AppointmentId;

/// One selectable time on a booking day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    #[serde(with = "serde_twelve_hour")]
    pub time: NaiveTime,
    pub is_booked: bool,
}

impl AvailableSlot {
    /// 12-hour label, e.g. `9:30 AM`.
    pub fn label(&self) -> String {
        datetime::format_twelve_hour(self.time)
    }
}

/// An appointment placed on a calendar timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Option<AppointmentId>,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
