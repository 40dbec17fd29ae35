//! Signals from the screens to the surrounding navigation layer.
//!
//! View-models never render anything. When they need the app to move to
//! another screen or show a message they emit a [`Signal`] through a
//! [`Navigator`].

use chrono::NaiveDateTime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateAppointment { provider_id: String },
    AppointmentCreated { date: NaiveDateTime },
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Navigate(Route),
    GoBack,
    Alert(Alert),
}

pub trait Navigator: Send + Sync {
    fn emit(&self, signal: Signal);

    fn navigate(&self, route: Route) {
        self.emit(Signal::Navigate(route));
    }

    fn go_back(&self) {
        self.emit(Signal::GoBack);
    }

    fn alert(&self, alert: Alert) {
        self.emit(Signal::Alert(alert));
    }
}

impl Navigator for UnboundedSender<Signal> {
    fn emit(&self, signal: Signal) {
        // A closed receiver means the navigation layer is gone
        if let Err(err) = self.send(signal) {
            debug!("Dropping signal after navigator closed: {:?}", err.0);
        }
    }
}

/// Navigator backed by an unbounded channel; the receiver side is handed to
/// whatever drives navigation.
pub fn channel() -> (UnboundedSender<Signal>, UnboundedReceiver<Signal>) {
    mpsc::unbounded_channel()
}
