//! # Persistence Seam
//!
//! The appointments API owns every record; the client only reads snapshots
//! and sends create, update and delete calls. [`AppointmentStore`] is that
//! surface, implemented over HTTP by
//! [`crate::http::HttpAppointmentStore`] and mocked in tests by
//! [`crate::mock::MockAppointmentStore`].

use appointly_core::{Appointment, AppointmentId, AppointmentPayload};
use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// All appointments visible to the signed-in user.
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    /// Appointments booked on one day.
    async fn list_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    /// Creates a record; the returned appointment carries its new id.
    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<Appointment>;

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        payload: &AppointmentPayload,
    ) -> Result<Appointment>;

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<()>;
}

/// Source of bearer tokens issued by the external identity provider.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String>;
}

/// A token obtained up front and used for every request.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
