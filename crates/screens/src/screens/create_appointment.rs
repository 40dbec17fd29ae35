//! # Appointment Scheduling
//!
//! View-model of the booking screen. It owns the user's in-progress choice
//! of provider, date and hour, the provider list, and the availability of the
//! selected provider on the selected day.
//!
//! The view-model does no I/O. Every operation runs to completion and returns
//! the [`Effect`]s the caller has to carry out: network calls, whose
//! [`Response`]s are fed back through [`CreateAppointment::apply`], and
//! signals for the navigation layer. [`crate::runtime::AppointmentScreen`]
//! does this with tokio tasks.
//!
//! ## Stale availability
//!
//! Every availability request carries the provider, the day and a generation
//! number. Responses are applied in arrival order, so a slow answer for an
//! earlier selection can arrive after the answer for the current one. Such a
//! response no longer matches the current request and is dropped. Provider
//! list reads are tagged the same way, so a late answer to an earlier read
//! cannot overwrite the list a retry already loaded.
//!
//! Once the screen is closed no operation issues further work.

use chrono::NaiveDateTime;
use gobarber_core::{
    errors::BookResult,
    models::{
        appointment::{Appointment, CreateAppointmentRequest},
        provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
    },
    slots::{self, DisplaySlot},
};
use tracing::{debug, info, warn};

use crate::{
    alerts::{self, Failure},
    navigation::{Route, Signal},
};

/// Device platform; decides how the date picker behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// The picker is a dialog that closes itself once a date is chosen
    Android,
    /// The picker is inline and stays open until toggled
    Ios,
}

impl Platform {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "android" => Some(Platform::Android),
            "ios" => Some(Platform::Ios),
            _ => None,
        }
    }
}

/// A day-availability fetch, tagged with the selection it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub generation: u64,
    pub provider_id: String,
    pub query: DayAvailabilityQuery,
}

/// Work requested by the view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the provider list; the number is the read's generation
    FetchProviders(u64),
    FetchAvailability(AvailabilityRequest),
    CreateAppointment(CreateAppointmentRequest),
    Signal(Signal),
}

/// Network results fed back into the view-model.
#[derive(Debug)]
pub enum Response {
    Providers(u64, BookResult<Vec<Provider>>),
    Availability(AvailabilityRequest, BookResult<Vec<AvailabilitySlot>>),
    AppointmentCreated(CreateAppointmentRequest, BookResult<Appointment>),
}

#[derive(Debug, Clone)]
pub struct CreateAppointment {
    platform: Platform,
    providers: Vec<Provider>,
    availability: Vec<AvailabilitySlot>,
    selected_provider: String,
    selected_date: NaiveDateTime,
    selected_hour: Option<u32>,
    show_date_picker: bool,
    providers_failed: bool,
    availability_failed: bool,
    generation: u64,
    pending_availability: Option<AvailabilityRequest>,
    pending_providers: Option<u64>,
    closed: bool,
}

impl CreateAppointment {
    /// Create the view-model for `provider_id` with `today` as the initial
    /// date. Nothing is fetched until [`initialize`](Self::initialize).
    pub fn new(provider_id: impl Into<String>, today: NaiveDateTime, platform: Platform) -> Self {
        Self {
            platform,
            providers: Vec::new(),
            availability: Vec::new(),
            selected_provider: provider_id.into(),
            selected_date: today,
            selected_hour: None,
            show_date_picker: false,
            providers_failed: false,
            availability_failed: false,
            generation: 0,
            pending_availability: None,
            pending_providers: None,
            closed: false,
        }
    }

    /// Screen mounted: load the provider list and the availability of the
    /// initial selection.
    pub fn initialize(&mut self) -> Vec<Effect> {
        info!("Opening appointment screen for provider {}", self.selected_provider);
        vec![self.refresh_providers(), self.refresh_availability()]
    }

    pub fn select_provider(&mut self, provider_id: &str) -> Vec<Effect> {
        if self.closed || self.selected_provider == provider_id {
            return Vec::new();
        }
        self.selected_provider = provider_id.to_string();
        vec![self.refresh_availability()]
    }

    /// Result of the date picker. `None` means it was dismissed without a
    /// choice.
    pub fn select_date(&mut self, date: Option<NaiveDateTime>) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        if self.platform == Platform::Android {
            self.show_date_picker = false;
        }

        match date {
            Some(date) if date != self.selected_date => {
                self.selected_date = date;
                vec![self.refresh_availability()]
            }
            _ => Vec::new(),
        }
    }

    pub fn toggle_date_picker(&mut self) {
        self.show_date_picker = !self.show_date_picker;
    }

    pub fn select_hour(&mut self, hour: u32) {
        self.selected_hour = Some(hour);
    }

    /// Book the selected provider at the selected date and hour.
    ///
    /// Every call issues its own request; repeated taps are not merged.
    pub fn submit(&self) -> Vec<Effect> {
        if self.closed {
            debug!("Appointment screen closed, not booking");
            return Vec::new();
        }
        let Some(hour) = self.selected_hour else {
            return vec![Effect::Signal(Signal::Alert(Failure::MissingHour.alert()))];
        };
        let Some(date) = slots::appointment_timestamp(self.selected_date, hour) else {
            return vec![Effect::Signal(Signal::Alert(Failure::InvalidHour.alert()))];
        };

        info!("Booking provider {} at {}", self.selected_provider, date);
        vec![Effect::CreateAppointment(CreateAppointmentRequest {
            provider_id: self.selected_provider.clone(),
            date,
        })]
    }

    pub fn go_back(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.close();
        vec![Effect::Signal(Signal::GoBack)]
    }

    pub fn retry_providers(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        vec![self.refresh_providers()]
    }

    pub fn retry_availability(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        vec![self.refresh_availability()]
    }

    /// Tear the screen down. Responses arriving afterwards are ignored.
    pub fn close(&mut self) {
        self.closed = true;
        self.pending_availability = None;
        self.pending_providers = None;
    }

    pub fn apply(&mut self, response: Response) -> Vec<Effect> {
        if self.closed {
            debug!("Ignoring response for closed appointment screen: {:?}", response);
            return Vec::new();
        }

        match response {
            Response::Providers(generation, result) => {
                self.on_provider_list_loaded(generation, result);
                Vec::new()
            }
            Response::Availability(request, result) => {
                self.on_availability_loaded(request, result);
                Vec::new()
            }
            Response::AppointmentCreated(request, result) => self.on_appointment_created(request, result),
        }
    }

    fn on_provider_list_loaded(&mut self, generation: u64, result: BookResult<Vec<Provider>>) {
        if self.pending_providers != Some(generation) {
            debug!("Discarding stale provider list (generation {})", generation);
            return;
        }

        match result {
            Ok(providers) => {
                debug!("Loaded {} providers", providers.len());
                self.providers = providers;
                self.providers_failed = false;
            }
            Err(err) => {
                warn!("Failed to load providers: {}", err);
                self.providers.clear();
                self.providers_failed = true;
            }
        }
    }

    fn on_availability_loaded(
        &mut self,
        request: AvailabilityRequest,
        result: BookResult<Vec<AvailabilitySlot>>,
    ) {
        if self.pending_availability.as_ref() != Some(&request) {
            debug!(
                "Discarding stale availability for {} (generation {})",
                request.provider_id, request.generation
            );
            return;
        }

        match result {
            Ok(availability) => {
                self.availability = availability;
                self.availability_failed = false;
            }
            Err(err) => {
                warn!("Failed to load availability for {}: {}", request.provider_id, err);
                self.availability.clear();
                self.availability_failed = true;
            }
        }
    }

    fn on_appointment_created(
        &mut self,
        request: CreateAppointmentRequest,
        result: BookResult<Appointment>,
    ) -> Vec<Effect> {
        match result {
            Ok(_) => {
                info!("Appointment created for {}", request.date);
                self.close();
                vec![Effect::Signal(Signal::Navigate(Route::AppointmentCreated {
                    date: request.date,
                }))]
            }
            Err(err) => vec![Effect::Signal(Signal::Alert(alerts::report(
                Failure::CreateAppointment,
                &err,
            )))],
        }
    }

    fn refresh_providers(&mut self) -> Effect {
        self.generation += 1;
        self.pending_providers = Some(self.generation);

        Effect::FetchProviders(self.generation)
    }

    fn refresh_availability(&mut self) -> Effect {
        self.generation += 1;
        let request = AvailabilityRequest {
            generation: self.generation,
            provider_id: self.selected_provider.clone(),
            query: DayAvailabilityQuery::from(self.selected_date.date()),
        };
        self.pending_availability = Some(request.clone());

        Effect::FetchAvailability(request)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn availability(&self) -> &[AvailabilitySlot] {
        &self.availability
    }

    pub fn morning_slots(&self) -> Vec<DisplaySlot> {
        slots::morning_slots(&self.availability)
    }

    pub fn afternoon_slots(&self) -> Vec<DisplaySlot> {
        slots::afternoon_slots(&self.availability)
    }

    pub fn selected_provider_id(&self) -> &str {
        &self.selected_provider
    }

    /// The selected provider, if it is part of the loaded list.
    pub fn selected_provider(&self) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == self.selected_provider)
    }

    pub fn selected_date(&self) -> NaiveDateTime {
        self.selected_date
    }

    pub fn selected_hour(&self) -> Option<u32> {
        self.selected_hour
    }

    pub fn is_date_picker_visible(&self) -> bool {
        self.show_date_picker
    }

    pub fn providers_failed(&self) -> bool {
        self.providers_failed
    }

    pub fn availability_failed(&self) -> bool {
        self.availability_failed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
