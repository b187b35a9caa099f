use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::appointment::AppointmentId;

/// Every way a scheduling input can be rejected.
///
/// Variants carry the offending values rather than user-facing prose; the
/// presentation layer maps [`SchedulingError::code`] to its own messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Title is empty")]
    EmptyTitle,

    #[error("Unparseable date/time: date={date:?} time={time:?}")]
    UnparseableDateTime { date: String, time: String },

    #[error("Unparseable date: {input:?}")]
    UnparseableDate { input: String },

    #[error("Unparseable time: {input:?}")]
    UnparseableTime { input: String },

    #[error("Requested {requested} is not after {now}")]
    PastDateTime {
        requested: NaiveDateTime,
        now: NaiveDateTime,
    },

    #[error("Hour {hour} is outside business hours [{start}, {end})")]
    OutsideBusinessHours { hour: u32, start: u32, end: u32 },

    #[error("Slot {date} {time} is already booked")]
    SlotConflict {
        date: NaiveDate,
        time: NaiveTime,
        conflicting_id: Option<AppointmentId>,
    },

    #[error("Invalid business hours: start={start} end={end}")]
    InvalidBusinessHours { start: u32, end: u32 },

    #[error("Invalid slot interval: {minutes} minutes")]
    InvalidSlotInterval { minutes: u32 },
}

impl SchedulingError {
    /// Stable identifier for the rule that failed.
    pub fn code(&self) -> &'static str {
        match self {
            SchedulingError::EmptyTitle => "empty_title",
            SchedulingError::UnparseableDateTime { .. } => "unparseable_date_time",
            SchedulingError::UnparseableDate { .. } => "unparseable_date",
            SchedulingError::UnparseableTime { .. } => "unparseable_time",
            SchedulingError::PastDateTime { .. } => "past_date_time",
            SchedulingError::OutsideBusinessHours { .. } => "outside_business_hours",
            SchedulingError::SlotConflict { .. } => "slot_conflict",
            SchedulingError::InvalidBusinessHours { .. } => "invalid_business_hours",
            SchedulingError::InvalidSlotInterval { .. } => "invalid_slot_interval",
        }
    }
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
