use appointly_core::{Appointment, AppointmentId, AppointmentPayload, datetime::ISO_DATE_FORMAT};
use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{Result, WrapErr, eyre};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ClientConfig,
    store::{AppointmentStore, TokenProvider},
};

/// [`AppointmentStore`] backed by the REST appointments API.
///
/// Every request carries `Authorization: Bearer <token>` from the token
/// provider.
pub struct HttpAppointmentStore<T> {
    client: Client,
    base_url: String,
    tokens: T,
}

impl<T: TokenProvider> HttpAppointmentStore<T> {
    pub fn new(config: &ClientConfig, tokens: T) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            tokens,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}appointments/", self.base_url)
    }

    fn record_url(&self, id: &AppointmentId) -> String {
        format!(
            "{}appointments/{}/",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self
            .tokens
            .bearer_token()
            .await
            .wrap_err("Failed to obtain bearer token")?;
        Ok(request.bearer_auth(token))
    }
}

async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(eyre!("Failed to {}: {} {}", action, status, error_text));
    }
    Ok(response)
}

async fn read_json<R: DeserializeOwned>(response: Response, action: &str) -> Result<R> {
    let response = ensure_success(response, action).await?;
    response
        .json()
        .await
        .wrap_err_with(|| format!("Failed to decode response to {}", action))
}

#[async_trait]
impl<T: TokenProvider> AppointmentStore for HttpAppointmentStore<T> {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let request = self.authorized(self.client.get(self.collection_url())).await?;
        let appointments: Vec<Appointment> =
            read_json(request.send().await?, "fetch appointments").await?;

        debug!(count = appointments.len(), "Fetched appointments");
        Ok(appointments)
    }

    async fn list_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let request = self
            .client
            .get(self.collection_url())
            .query(&[("date", date.format(ISO_DATE_FORMAT).to_string())]);
        let request = self.authorized(request).await?;
        let appointments: Vec<Appointment> =
            read_json(request.send().await?, "fetch appointments for day").await?;

        debug!(%date, count = appointments.len(), "Fetched appointments for day");
        Ok(appointments)
    }

    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<Appointment> {
        let request = self.client.post(self.collection_url()).json(payload);
        let request = self.authorized(request).await?;

        read_json(request.send().await?, "create appointment").await
    }

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        payload: &AppointmentPayload,
    ) -> Result<Appointment> {
        let request = self.client.put(self.record_url(id)).json(payload);
        let request = self.authorized(request).await?;

        read_json(request.send().await?, "update appointment").await
    }

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<()> {
        let request = self.authorized(self.client.delete(self.record_url(id))).await?;
        ensure_success(request.send().await?, "delete appointment").await?;

        Ok(())
    }
}
