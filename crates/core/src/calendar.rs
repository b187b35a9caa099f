//! Day and multi-day views over a set of appointments, as shown on the staff
//! bookings calendar and the admin overview.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{appointment::Appointment, slot::CalendarEvent};

/// Appointments on `date`, earliest first.
pub fn appointments_on(date: NaiveDate, appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut day: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.date == date)
        .collect();
    day.sort_by_key(|appointment| appointment.time);
    day
}

/// Appointments grouped per day; days ascending, each day ordered by time.
pub fn group_by_date(appointments: &[Appointment]) -> BTreeMap<NaiveDate, Vec<&Appointment>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Appointment>> = BTreeMap::new();
    for appointment in appointments {
        days.entry(appointment.date).or_default().push(appointment);
    }
    for day in days.values_mut() {
        day.sort_by_key(|appointment| appointment.time);
    }
    days
}

/// Timeline events ordered by start; every event lasts `duration`.
pub fn calendar_events(appointments: &[Appointment], duration: Duration) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = appointments
        .iter()
        .map(|appointment| {
            let start = appointment.starts_at();
            CalendarEvent {
                id: appointment.id.clone(),
                title: appointment.title.clone(),
                start,
                end: start + duration,
            }
        })
        .collect();
    events.sort_by_key(|event| event.start);
    events
}
