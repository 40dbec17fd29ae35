//! Time-slot derivation for the appointment screen.
//!
//! Raw availability arrives as one entry per hour. The screen shows it as two
//! sections: morning (hours before 12) and afternoon (hours after 12). Noon
//! itself is listed in neither section. Both lists keep the order of the
//! source list and are rebuilt from scratch on every call.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::provider::AvailabilitySlot;

pub const NOON: u32 = 12;

/// An availability entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySlot {
    pub hour: u32,
    /// 24-hour label such as `"09:00"`
    pub label: String,
    pub available: bool,
}

impl From<&AvailabilitySlot> for DisplaySlot {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            hour: slot.hour,
            label: format_hour(slot.hour),
            available: slot.available,
        }
    }
}

/// Format an hour as a zero-padded `HH:00` label.
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn morning_slots(availability: &[AvailabilitySlot]) -> Vec<DisplaySlot> {
    availability
        .iter()
        .filter(|slot| slot.hour < NOON)
        .map(DisplaySlot::from)
        .collect()
}

pub fn afternoon_slots(availability: &[AvailabilitySlot]) -> Vec<DisplaySlot> {
    availability
        .iter()
        .filter(|slot| slot.hour > NOON)
        .map(DisplaySlot::from)
        .collect()
}

/// Build the timestamp of an appointment.
///
/// The hour of `date` is replaced by `hour` and the minute is set to zero.
/// Seconds and fractions are left as they are on `date`. Returns `None` when
/// `hour` is not a valid hour of the day.
pub fn appointment_timestamp(date: NaiveDateTime, hour: u32) -> Option<NaiveDateTime> {
    date.with_hour(hour)?.with_minute(0)
}
