//! # GoBarber API Client
//!
//! Typed access to the GoBarber REST API. Screens never talk HTTP directly:
//! they receive a [`BarberApi`] implementation at construction, which is
//! [`HttpApi`] in the app and a mock in tests.

pub mod config;
pub mod endpoints;
pub mod http;

pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use gobarber_core::{
    errors::BookResult,
    models::{
        appointment::{Appointment, CreateAppointmentRequest},
        provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
        user::{AvatarUpload, SignUpForm, UpdateProfileRequest, User},
    },
};

pub use http::HttpApi;

/// Operations the screens need from the GoBarber service.
#[async_trait]
pub trait BarberApi: Send + Sync {
    /// `GET providers`
    async fn list_providers(&self) -> BookResult<Vec<Provider>>;

    /// `GET providers/{provider_id}/day-availability?year=&month=&day=`
    async fn day_availability(
        &self,
        provider_id: &str,
        query: DayAvailabilityQuery,
    ) -> BookResult<Vec<AvailabilitySlot>>;

    /// `POST appointments`
    async fn create_appointment(&self, request: &CreateAppointmentRequest) -> BookResult<Appointment>;

    /// `POST users`
    async fn sign_up(&self, form: &SignUpForm) -> BookResult<User>;

    /// `PUT profile`
    async fn update_profile(&self, request: &UpdateProfileRequest) -> BookResult<User>;

    /// `PATCH users/avatar`
    async fn update_avatar(&self, upload: AvatarUpload) -> BookResult<User>;
}

pub type SharedApi = Arc<dyn BarberApi>;

pub fn create_client(config: &config::ClientConfig) -> Result<SharedApi> {
    let api = HttpApi::new(config)?;

    Ok(Arc::new(api))
}
