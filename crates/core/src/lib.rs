//! # Appointly Core
//!
//! Scheduling rules for the appointment client: date/time normalization,
//! candidate validation, slot listing and calendar views.
//!
//! Everything here is a pure function of its inputs. The current time and
//! the snapshot of booked appointments are always passed in by the caller;
//! nothing reads a clock, the network or storage.

/// Calendar views over booked appointments
pub mod calendar;
/// Parsing and formatting of dates and times
pub mod datetime;
/// Scheduling error taxonomy
pub mod errors;
/// Appointment, business hours and slot types
pub mod models;
/// Slot listing for a booking day
pub mod slots;
/// Booking candidate validation
pub mod validator;

pub use datetime::{DisplayDateFormat, to_12_hour, to_24_hour, to_display_date, to_iso_date};
pub use errors::{SchedulingError, SchedulingResult};
pub use models::{
    appointment::{Appointment, AppointmentCandidate, AppointmentId, AppointmentPayload},
    business_hours::{BusinessHours, SlotInterval},
    slot::{AvailableSlot, CalendarEvent},
};
pub use slots::{AvailableSlots, list_available_slots};
pub use validator::validate_candidate;
