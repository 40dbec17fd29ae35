//! Drives [`CreateAppointment`] against a live API.
//!
//! Effects that need the network run on their own tokio task. Their results
//! come back over an mpsc channel and are applied one at a time, in the order
//! they arrive. Signals go straight to the navigator.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use gobarber_client::SharedApi;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::{
    navigation::Navigator,
    screens::create_appointment::{CreateAppointment, Effect, Platform, Response},
};

pub struct AppointmentScreen {
    model: CreateAppointment,
    api: SharedApi,
    navigator: Arc<dyn Navigator>,
    responses_tx: UnboundedSender<Response>,
    responses_rx: UnboundedReceiver<Response>,
    in_flight: usize,
}

impl AppointmentScreen {
    /// Open the screen for `provider_id` with today's date selected.
    pub fn open(
        api: SharedApi,
        navigator: Arc<dyn Navigator>,
        provider_id: &str,
        platform: Platform,
    ) -> Self {
        Self::open_at(api, navigator, provider_id, platform, Local::now().naive_local())
    }

    pub fn open_at(
        api: SharedApi,
        navigator: Arc<dyn Navigator>,
        provider_id: &str,
        platform: Platform,
        today: NaiveDateTime,
    ) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        let mut screen = Self {
            model: CreateAppointment::new(provider_id, today, platform),
            api,
            navigator,
            responses_tx,
            responses_rx,
            in_flight: 0,
        };

        let effects = screen.model.initialize();
        screen.run(effects);
        screen
    }

    pub fn model(&self) -> &CreateAppointment {
        &self.model
    }

    pub fn select_provider(&mut self, provider_id: &str) {
        let effects = self.model.select_provider(provider_id);
        self.run(effects);
    }

    pub fn select_date(&mut self, date: Option<NaiveDateTime>) {
        let effects = self.model.select_date(date);
        self.run(effects);
    }

    pub fn toggle_date_picker(&mut self) {
        self.model.toggle_date_picker();
    }

    pub fn select_hour(&mut self, hour: u32) {
        self.model.select_hour(hour);
    }

    pub fn submit(&mut self) {
        let effects = self.model.submit();
        self.run(effects);
    }

    pub fn retry_providers(&mut self) {
        let effects = self.model.retry_providers();
        self.run(effects);
    }

    pub fn retry_availability(&mut self) {
        let effects = self.model.retry_availability();
        self.run(effects);
    }

    pub fn go_back(&mut self) {
        let effects = self.model.go_back();
        self.run(effects);
    }

    /// Number of network calls whose response has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Wait for the next response and apply it. Returns `false` when nothing
    /// is in flight.
    pub async fn next_response(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        match self.responses_rx.recv().await {
            Some(response) => {
                self.in_flight -= 1;
                let effects = self.model.apply(response);
                self.run(effects);
                true
            }
            None => false,
        }
    }

    /// Apply responses until no network call is left in flight.
    pub async fn settle(&mut self) {
        while self.next_response().await {}
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Signal(signal) => self.navigator.emit(signal),
                Effect::FetchProviders(generation) => self.spawn(|api| async move {
                    Response::Providers(generation, api.list_providers().await)
                }),
                Effect::FetchAvailability(request) => self.spawn(|api| async move {
                    let result = api.day_availability(&request.provider_id, request.query).await;
                    Response::Availability(request, result)
                }),
                Effect::CreateAppointment(request) => self.spawn(|api| async move {
                    let result = api.create_appointment(&request).await;
                    Response::AppointmentCreated(request, result)
                }),
            }
        }
    }

    fn spawn<F, Fut>(&mut self, call: F)
    where
        F: FnOnce(SharedApi) -> Fut,
        Fut: std::future::Future<Output = Response> + Send + 'static,
    {
        let fut = call(self.api.clone());
        let tx = self.responses_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let response = fut.await;
            // The screen may have been dropped while the call was running
            if tx.send(response).is_err() {
                debug!("Appointment screen gone, dropping response");
            }
        });
    }
}
