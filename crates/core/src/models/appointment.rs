use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub provider_id: String,
    pub date: NaiveDateTime,
}

/// Appointment record returned by `POST appointments`.
///
/// Only the timestamp is guaranteed; it is kept as the raw string the
/// service sent since no timezone handling happens on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: String,
}
