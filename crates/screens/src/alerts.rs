//! # Failure Alerts
//!
//! Maps failures to the messages shown to the user. Every failure of a given
//! kind produces the same generic alert regardless of the underlying error;
//! the error itself only goes to the log.

use gobarber_core::errors::BookError;
use tracing::{error, warn};

use crate::navigation::Alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    CreateAppointment,
    MissingHour,
    InvalidHour,
    SignUp,
    UpdateProfile,
    UpdateAvatar,
}

impl Failure {
    pub fn alert(self) -> Alert {
        match self {
            Failure::CreateAppointment => Alert::new(
                "Error creating appointment",
                "Something went wrong while creating the appointment, please try again!",
            ),
            Failure::MissingHour => Alert::new(
                "Choose a time",
                "Pick one of the available hours before booking.",
            ),
            Failure::InvalidHour => Alert::new(
                "Invalid time",
                "The selected hour is not a valid time of day.",
            ),
            Failure::SignUp => Alert::new(
                "Sign-up error",
                "Something went wrong while creating your account, check your data.",
            ),
            Failure::UpdateProfile => Alert::new(
                "Profile update error",
                "Something went wrong while updating your profile, try again.",
            ),
            Failure::UpdateAvatar => Alert::new(
                "Error updating your avatar",
                "Something went wrong while uploading the image, try again.",
            ),
        }
    }
}

/// Log `err` and return the generic alert for `failure`.
pub fn report(failure: Failure, err: &BookError) -> Alert {
    match err {
        BookError::Validation(_) | BookError::Authentication(_) => {
            warn!("{:?} rejected: {}", failure, err)
        }
        _ => error!("{:?} failed: {}", failure, err),
    }

    failure.alert()
}

pub fn account_created() -> Alert {
    Alert::new(
        "Account created!",
        "You can now sign in to the application.",
    )
}

pub fn profile_updated() -> Alert {
    Alert::new(
        "Profile updated!",
        "Your profile information was updated successfully.",
    )
}
