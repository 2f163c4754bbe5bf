use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{decode_appointment_list, AppointmentRecord},
    error::FetchError,
};
use tracing::debug;

/// Where the appointment list comes from.
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    fn endpoint(&self) -> &str;

    async fn fetch_appointments(&self) -> Result<Vec<AppointmentRecord>, FetchError>;
}

/// Plain `GET` against the appointments endpoint: no headers, no auth, no
/// query parameters.
pub struct HttpAppointmentSource {
    http: Client,
    endpoint: String,
}

impl HttpAppointmentSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AppointmentSource for HttpAppointmentSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_appointments(&self) -> Result<Vec<AppointmentRecord>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::transport(&self.endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(&self.endpoint, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::transport(&self.endpoint, err))?;
        let records = decode_appointment_list(&body)
            .map_err(|err| FetchError::decode(&self.endpoint, err))?;

        debug!(
            endpoint = %self.endpoint,
            count = records.len(),
            "appointments: list decoded"
        );
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
