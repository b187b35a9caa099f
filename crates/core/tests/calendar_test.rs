use appointly_core::calendar::{appointments_on, calendar_events, group_by_date};
use appointly_core::models::appointment::{Appointment, AppointmentId};
use chrono::{Duration, NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;

fn booked(id: i64, date: &str, time: &str) -> Appointment {
    Appointment {
        id: Some(AppointmentId::from(id)),
        title: format!("Booking {}", id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
    }
}

fn ids<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> Vec<String> {
    appointments
        .into_iter()
        .filter_map(|appointment| appointment.id.as_ref().map(ToString::to_string))
        .collect()
}

fn sample() -> Vec<Appointment> {
    vec![
        booked(1, "2025-02-02", "09:00:00"),
        booked(2, "2025-02-01", "15:00:00"),
        booked(3, "2025-02-01", "09:30:00"),
        booked(4, "2025-01-31", "16:00:00"),
    ]
}

#[test]
fn test_appointments_on_filters_and_orders_by_time() {
    let appointments = sample();
    let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    assert_eq!(ids(appointments_on(day, &appointments)), vec!["3", "2"]);
    assert!(appointments_on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), &appointments).is_empty());
}

#[test]
fn test_group_by_date() {
    let appointments = sample();

    let days = group_by_date(&appointments);

    let keys: Vec<String> = days.keys().map(|date| date.to_string()).collect();
    assert_eq!(keys, vec!["2025-01-31", "2025-02-01", "2025-02-02"]);
    assert_eq!(
        ids(days[&NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()].iter().copied()),
        vec!["3", "2"]
    );
}

#[test]
fn test_calendar_events_span_duration_and_sort_by_start() {
    let appointments = sample();

    let events = calendar_events(&appointments, Duration::minutes(30));

    let order: Vec<String> = events
        .iter()
        .filter_map(|event| event.id.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(order, vec!["4", "3", "2", "1"]);

    let first = &events[0];
    assert_eq!(first.title, "Booking 4");
    assert_eq!(first.start.to_string(), "2025-01-31 16:00:00");
    assert_eq!(first.end - first.start, Duration::minutes(30));
}
