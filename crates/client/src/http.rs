use std::time::Duration;

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use gobarber_core::{
    errors::{BookError, BookResult},
    models::{
        appointment::{Appointment, CreateAppointmentRequest},
        provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
        user::{AvatarUpload, SignUpForm, UpdateProfileRequest, User},
    },
};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{config::ClientConfig, endpoints, BarberApi};

/// [`BarberApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.config.endpoint(path)))
    }

    pub fn get_url(&self, url: Url) -> RequestBuilder {
        self.authorize(self.client.get(url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.config.endpoint(path)))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(self.config.endpoint(path)))
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.patch(self.config.endpoint(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON body from a successful response.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> BookResult<T> {
        let response = request
            .send()
            .await
            .wrap_err("Request to GoBarber API failed")
            .map_err(BookError::Transport)?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> BookResult<T> {
    let status = response.status();
    debug!("{} {}", status.as_u16(), response.url().path());

    if !status.is_success() {
        let body = response
            .text()
            .await
            .wrap_err("Failed to read error response")
            .map_err(BookError::Transport)?;
        return Err(BookError::from_status(status.as_u16(), error_message(&body)));
    }

    response
        .json::<T>()
        .await
        .wrap_err("Failed to decode response body")
        .map_err(BookError::Transport)
}

/// The service answers errors as `{"status": "error", "message": "..."}`;
/// anything else is passed through verbatim.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl BarberApi for HttpApi {
    async fn list_providers(&self) -> BookResult<Vec<Provider>> {
        endpoints::providers::list_providers(self).await
    }

    async fn day_availability(
        &self,
        provider_id: &str,
        query: DayAvailabilityQuery,
    ) -> BookResult<Vec<AvailabilitySlot>> {
        endpoints::providers::day_availability(self, provider_id, query).await
    }

    async fn create_appointment(&self, request: &CreateAppointmentRequest) -> BookResult<Appointment> {
        endpoints::appointments::create_appointment(self, request).await
    }

    async fn sign_up(&self, form: &SignUpForm) -> BookResult<User> {
        endpoints::users::sign_up(self, form).await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> BookResult<User> {
        endpoints::users::update_profile(self, request).await
    }

    async fn update_avatar(&self, upload: AvatarUpload) -> BookResult<User> {
        endpoints::users::update_avatar(self, upload).await
    }
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn test_error_message_extracts_message_field() {
        let body = r#"{"status": "error", "message": "This appointment is already booked"}"#;
        assert_eq!(error_message(body), "This appointment is already booked");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
