//! # Booking Flow
//!
//! Wires the scheduling rules to the appointments API. Every write is
//! validated against a fresh snapshot of booked appointments before it is
//! sent; a rejected candidate never reaches the store.
//!
//! Saving follows the create-or-update dispatch of the booking form: a
//! candidate without an id is created, one with an id updates that record.

use appointly_core::{
    Appointment, AppointmentCandidate, AppointmentId, AvailableSlots, BusinessHours,
    CalendarEvent, DisplayDateFormat, SlotInterval,
    calendar::{appointments_on, calendar_events},
    datetime::parse_date,
    models::appointment::DisplayAppointment,
    validate_candidate,
};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ClientConfig,
    errors::BookingResult,
    store::AppointmentStore,
};

pub struct BookingService<S> {
    store: S,
    business_hours: BusinessHours,
    slot_interval: SlotInterval,
    display_date_format: DisplayDateFormat,
}

impl<S: AppointmentStore> BookingService<S> {
    pub fn new(
        store: S,
        business_hours: BusinessHours,
        slot_interval: SlotInterval,
        display_date_format: DisplayDateFormat,
    ) -> Self {
        Self {
            store,
            business_hours,
            slot_interval,
            display_date_format,
        }
    }

    pub fn from_config(store: S, config: &ClientConfig) -> Self {
        Self::new(
            store,
            config.business_hours,
            config.slot_interval,
            config.display_date_format,
        )
    }

    /// Validates `candidate` and creates or updates it.
    ///
    /// # Errors
    ///
    /// * [`BookingError::Rejected`](crate::BookingError::Rejected) if a scheduling rule fails; nothing is written
    /// * [`BookingError::Store`](crate::BookingError::Store) if fetching the snapshot or writing fails
    #[instrument(skip(self, candidate), fields(id = ?candidate.id))]
    pub async fn save(
        &self,
        candidate: &AppointmentCandidate,
        now: NaiveDateTime,
    ) -> BookingResult<Appointment> {
        let existing = self.store.list_appointments().await?;
        debug!(count = existing.len(), "Validating against booked appointments");

        let appointment = validate_candidate(candidate, &existing, &self.business_hours, now)
            .inspect_err(|err| warn!(code = err.code(), "Rejected appointment: {}", err))?;
        let payload = appointment.payload();

        let saved = match &appointment.id {
            Some(id) => {
                info!(%id, date = %appointment.date, time = %appointment.time, "Updating appointment");
                self.store.update_appointment(id, &payload).await?
            }
            None => {
                info!(date = %appointment.date, time = %appointment.time, "Creating appointment");
                self.store.create_appointment(&payload).await?
            }
        };

        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: &AppointmentId) -> BookingResult<()> {
        self.store.delete_appointment(id).await?;
        info!(%id, "Deleted appointment");
        Ok(())
    }

    /// The day's slots between business hours, flagging booked ones.
    pub async fn available_slots(&self, date: &str) -> BookingResult<AvailableSlots> {
        let (day, booked) = self.fetch_day(date).await?;
        Ok(AvailableSlots::new(
            day,
            &booked,
            &self.business_hours,
            self.slot_interval,
        ))
    }

    /// The day's appointments as display cards, earliest first.
    pub async fn agenda(&self, date: &str) -> BookingResult<Vec<DisplayAppointment>> {
        let (day, booked) = self.fetch_day(date).await?;
        Ok(appointments_on(day, &booked)
            .into_iter()
            .map(|appointment| appointment.display(self.display_date_format))
            .collect())
    }

    /// The day's appointments as timeline events one slot long.
    pub async fn calendar(&self, date: &str) -> BookingResult<Vec<CalendarEvent>> {
        let (day, booked) = self.fetch_day(date).await?;
        let on_day: Vec<Appointment> = appointments_on(day, &booked).into_iter().cloned().collect();
        Ok(calendar_events(&on_day, self.slot_interval.as_duration()))
    }

    async fn fetch_day(&self, date: &str) -> BookingResult<(NaiveDate, Vec<Appointment>)> {
        let day = parse_date(date)?;
        let booked = self.store.list_appointments_on(day).await?;
        debug!(%day, count = booked.len(), "Fetched appointments for day");
        Ok((day, booked))
    }
}
