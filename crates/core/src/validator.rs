//! # Candidate Validation
//!
//! Decides whether a booking form submission may be sent to the persistence
//! API. Rules are checked in a fixed order and the first failing rule is
//! reported:
//!
//! 1. the trimmed title is not empty
//! 2. date and time both parse
//! 3. the requested moment is strictly after `now`
//! 4. the hour lies inside business hours
//! 5. no other appointment holds the same `(date, time)` slot
//!
//! All inputs are explicit, including the current time, so validation is a
//! pure function of its arguments.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{
    datetime::{parse_date, parse_time},
    errors::{SchedulingError, SchedulingResult},
    models::{
        appointment::{Appointment, AppointmentCandidate, AppointmentId},
        business_hours::BusinessHours,
    },
};

/// Validates `candidate` against a snapshot of booked appointments.
///
/// # Arguments
///
/// * `candidate` - Raw form input; its `id` is set when editing
/// * `existing` - Appointments already booked, as last fetched
/// * `business_hours` - Daily window bookings must start in
/// * `now` - Current wall-clock time on the booking calendar
///
/// # Returns
///
/// The canonical appointment, with trimmed title and parsed date and time,
/// ready to be sent to the persistence API.
///
/// # Errors
///
/// The [`SchedulingError`] of the first rule that fails.
pub fn validate_candidate(
    candidate: &AppointmentCandidate,
    existing: &[Appointment],
    business_hours: &BusinessHours,
    now: NaiveDateTime,
) -> SchedulingResult<Appointment> {
    let title = candidate.title.trim();
    if title.is_empty() {
        return Err(SchedulingError::EmptyTitle);
    }

    let (date, time) = match (parse_date(&candidate.date), parse_time(&candidate.time)) {
        (Ok(date), Ok(time)) => (date, time),
        _ => {
            return Err(SchedulingError::UnparseableDateTime {
                date: candidate.date.clone(),
                time: candidate.time.clone(),
            });
        }
    };

    let requested = date.and_time(time);
    if requested <= now {
        return Err(SchedulingError::PastDateTime { requested, now });
    }

    if !business_hours.contains_hour(time.hour()) {
        return Err(SchedulingError::OutsideBusinessHours {
            hour: time.hour(),
            start: business_hours.start(),
            end: business_hours.end(),
        });
    }

    if let Some(conflict) = find_conflict(existing, date, time, candidate.id.as_ref()) {
        return Err(SchedulingError::SlotConflict {
            date,
            time,
            conflicting_id: conflict.id.clone(),
        });
    }

    Ok(Appointment {
        id: candidate.id.clone(),
        title: title.to_string(),
        date,
        time,
    })
}

/// First appointment holding `(date, time)` other than the one being edited.
///
/// With `editing` unset every occupant counts as a conflict.
pub fn find_conflict<'a>(
    existing: &'a [Appointment],
    date: NaiveDate,
    time: NaiveTime,
    editing: Option<&AppointmentId>,
) -> Option<&'a Appointment> {
    existing.iter().find(|appointment| {
        appointment.occupies(date, time)
            && match editing {
                Some(own) => appointment.id.as_ref() != Some(own),
                None => true,
            }
    })
}

pub fn is_slot_available(existing: &[Appointment], date: NaiveDate, time: NaiveTime) -> bool {
    find_conflict(existing, date, time, None).is_none()
}
