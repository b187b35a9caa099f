//! # Appointly Client
//!
//! The booking side of the appointment client. It runs the scheduling rules
//! from `appointly-core` in front of the external appointments API.
//!
//! ## Architecture
//!
//! - **Config**: Environment-driven settings (API URL, business hours, slot interval)
//! - **Store**: The persistence seam, with an HTTP implementation and a mock
//! - **Booking**: Validate-then-write flow plus day views for the UI
//! - **Telemetry**: Tracing subscriber setup

/// Validate-then-write booking flow
pub mod booking;
/// Configuration loaded from the environment
pub mod config;
pub mod errors;
/// REST implementation of the appointment store
pub mod http;
pub mod mock;
/// Persistence and identity seams
pub mod store;
pub mod telemetry;

pub use booking::BookingService;
pub use config::ClientConfig;
pub use errors::{BookingError, BookingResult};
pub use http::HttpAppointmentStore;
pub use store::{AppointmentStore, StaticToken, TokenProvider};
