#![allow(dead_code)]

use std::{collections::HashMap, sync::{Arc, Mutex}, time::Duration};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use gobarber_client::BarberApi;
use gobarber_core::{
    errors::{BookError, BookResult},
    models::{
        appointment::{Appointment, CreateAppointmentRequest},
        provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
        user::{AvatarUpload, SignUpForm, UpdateProfileRequest, User},
    },
};
use gobarber_screens::navigation::{self, Signal};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

pub fn provider(id: &str, name: &str) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: format!("http://localhost:3333/files/{}.jpg", id),
    }
}

pub fn providers() -> Vec<Provider> {
    vec![provider("p1", "Diego Fernandes"), provider("p2", "Mayk Brito")]
}

pub fn slot(hour: u32, available: bool) -> AvailabilitySlot {
    AvailabilitySlot { hour, available }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

pub fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        avatar_url: None,
    }
}

pub fn signals() -> (Arc<UnboundedSender<Signal>>, UnboundedReceiver<Signal>) {
    let (tx, rx) = navigation::channel();
    (Arc::new(tx), rx)
}

/// Collect every signal emitted so far
pub fn drain(rx: &mut UnboundedReceiver<Signal>) -> Vec<Signal> {
    let mut received = Vec::new();
    while let Ok(signal) = rx.try_recv() {
        received.push(signal);
    }
    received
}

/// Scripted API for runtime tests where response timing matters.
#[derive(Default)]
pub struct FakeApi {
    pub providers: Vec<Provider>,
    /// provider id -> (response delay, slots)
    pub availability: HashMap<String, (Duration, Vec<AvailabilitySlot>)>,
    pub fail_appointments: bool,
    pub availability_calls: Mutex<Vec<(String, DayAvailabilityQuery)>>,
    pub created: Mutex<Vec<CreateAppointmentRequest>>,
}

impl FakeApi {
    pub fn with_availability(mut self, provider_id: &str, delay_ms: u64, slots: Vec<AvailabilitySlot>) -> Self {
        self.availability
            .insert(provider_id.to_string(), (Duration::from_millis(delay_ms), slots));
        self
    }
}

#[async_trait]
impl BarberApi for FakeApi {
    async fn list_providers(&self) -> BookResult<Vec<Provider>> {
        Ok(self.providers.clone())
    }

    async fn day_availability(
        &self,
        provider_id: &str,
        query: DayAvailabilityQuery,
    ) -> BookResult<Vec<AvailabilitySlot>> {
        self.availability_calls
            .lock()
            .unwrap()
            .push((provider_id.to_string(), query));

        let (delay, slots) = self
            .availability
            .get(provider_id)
            .cloned()
            .ok_or_else(|| BookError::NotFound(format!("provider {}", provider_id)))?;
        tokio::time::sleep(delay).await;
        Ok(slots)
    }

    async fn create_appointment(&self, request: &CreateAppointmentRequest) -> BookResult<Appointment> {
        self.created.lock().unwrap().push(request.clone());

        if self.fail_appointments {
            return Err(BookError::Api {
                status: 400,
                message: "This appointment is already booked".to_string(),
            });
        }
        Ok(Appointment {
            id: Some("a1".to_string()),
            provider_id: Some(request.provider_id.clone()),
            user_id: Some("u1".to_string()),
            date: request.date.to_string(),
        })
    }

    async fn sign_up(&self, _form: &SignUpForm) -> BookResult<User> {
        Err(BookError::NotFound("sign_up".to_string()))
    }

    async fn update_profile(&self, _request: &UpdateProfileRequest) -> BookResult<User> {
        Err(BookError::NotFound("update_profile".to_string()))
    }

    async fn update_avatar(&self, _upload: AvatarUpload) -> BookResult<User> {
        Err(BookError::NotFound("update_avatar".to_string()))
    }
}
