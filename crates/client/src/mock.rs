use appointly_core::{Appointment, AppointmentId, AppointmentPayload};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::store::AppointmentStore;

// Mock store for testing
mock! {
    pub AppointmentStore {}

    #[async_trait]
    impl AppointmentStore for AppointmentStore {
        async fn list_appointments(&self) -> eyre::Result<Vec<Appointment>>;

        async fn list_appointments_on(&self, date: NaiveDate) -> eyre::Result<Vec<Appointment>>;

        async fn create_appointment(
            &self,
            payload: &AppointmentPayload,
        ) -> eyre::Result<Appointment>;

        async fn update_appointment(
            &self,
            id: &AppointmentId,
            payload: &AppointmentPayload,
        ) -> eyre::Result<Appointment>;

        async fn delete_appointment(&self, id: &AppointmentId) -> eyre::Result<()>;
    }
}
