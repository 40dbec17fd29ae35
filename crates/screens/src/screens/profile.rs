use std::sync::Arc;

use gobarber_client::SharedApi;
use gobarber_core::{
    models::user::{AvatarUpload, ProfileForm},
    validation::{FieldErrors, ProfileSchema, Validator},
};
use tracing::{debug, warn};

use crate::{
    alerts::{self, Failure},
    auth::AuthContext,
    navigation::Navigator,
    screens::FormOutcome,
};

/// What the device image picker handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarPick {
    Cancelled,
    Failed(String),
    Picked(Vec<u8>),
}

pub struct Profile {
    api: SharedApi,
    navigator: Arc<dyn Navigator>,
    auth: AuthContext,
    validator: Box<dyn Validator<ProfileForm> + Send + Sync>,
    errors: FieldErrors,
}

impl Profile {
    pub fn new(api: SharedApi, navigator: Arc<dyn Navigator>, auth: AuthContext) -> Self {
        Self::with_validator(api, navigator, auth, Box::new(ProfileSchema))
    }

    pub fn with_validator(
        api: SharedApi,
        navigator: Arc<dyn Navigator>,
        auth: AuthContext,
        validator: Box<dyn Validator<ProfileForm> + Send + Sync>,
    ) -> Self {
        Self {
            api,
            navigator,
            auth,
            validator,
            errors: FieldErrors::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn go_back(&self) {
        self.navigator.go_back();
    }

    pub async fn submit(&mut self, form: ProfileForm) -> FormOutcome {
        self.errors = FieldErrors::new();

        if let Err(errors) = self.validator.validate(&form) {
            self.errors = errors;
            self.navigator.alert(Failure::UpdateProfile.alert());
            return FormOutcome::Invalid;
        }

        match self.api.update_profile(&form.to_request()).await {
            Ok(user) => {
                self.auth.update_user(user).await;
                self.navigator.alert(alerts::profile_updated());
                self.navigator.go_back();
                FormOutcome::Saved
            }
            Err(err) => {
                self.navigator.alert(alerts::report(Failure::UpdateProfile, &err));
                FormOutcome::Failed
            }
        }
    }

    pub async fn update_avatar(&self, pick: AvatarPick) {
        let bytes = match pick {
            AvatarPick::Cancelled => {
                debug!("Avatar picker cancelled");
                return;
            }
            AvatarPick::Failed(reason) => {
                warn!("Avatar picker failed: {}", reason);
                self.navigator.alert(Failure::UpdateAvatar.alert());
                return;
            }
            AvatarPick::Picked(bytes) => bytes,
        };

        let Some(user) = self.auth.user().await else {
            warn!("Avatar picked without a signed-in user");
            self.navigator.alert(Failure::UpdateAvatar.alert());
            return;
        };

        match self.api.update_avatar(AvatarUpload::jpeg_for(&user, bytes)).await {
            Ok(updated) => self.auth.update_user(updated).await,
            Err(err) => self.navigator.alert(alerts::report(Failure::UpdateAvatar, &err)),
        }
    }
}
