use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

/// One hour of a provider's day as reported by the availability endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub hour: u32,
    pub available: bool,
}

/// Query string of `providers/{id}/day-availability`.
///
/// `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayAvailabilityQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for DayAvailabilityQuery {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
