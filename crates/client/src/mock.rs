use async_trait::async_trait;
use gobarber_core::{
    errors::BookResult,
    models::{
        appointment::{Appointment, CreateAppointmentRequest},
        provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
        user::{AvatarUpload, SignUpForm, UpdateProfileRequest, User},
    },
};
use mockall::mock;

use crate::BarberApi;

// Mock API for screen tests
mock! {
    pub BarberApi {}

    #[async_trait]
    impl BarberApi for BarberApi {
        async fn list_providers(&self) -> BookResult<Vec<Provider>>;

        async fn day_availability(
            &self,
            provider_id: &str,
            query: DayAvailabilityQuery,
        ) -> BookResult<Vec<AvailabilitySlot>>;

        async fn create_appointment(
            &self,
            request: &CreateAppointmentRequest,
        ) -> BookResult<Appointment>;

        async fn sign_up(&self, form: &SignUpForm) -> BookResult<User>;

        async fn update_profile(&self, request: &UpdateProfileRequest) -> BookResult<User>;

        async fn update_avatar(&self, upload: AvatarUpload) -> BookResult<User>;
    }
}
