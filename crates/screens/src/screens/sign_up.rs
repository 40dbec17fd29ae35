use std::sync::Arc;

use gobarber_client::SharedApi;
use gobarber_core::{
    models::user::SignUpForm,
    validation::{FieldErrors, SignUpSchema, Validator},
};
use tracing::info;

use crate::{
    alerts::{self, Failure},
    navigation::Navigator,
    screens::FormOutcome,
};

pub struct SignUp {
    api: SharedApi,
    navigator: Arc<dyn Navigator>,
    validator: Box<dyn Validator<SignUpForm> + Send + Sync>,
    errors: FieldErrors,
}

impl SignUp {
    pub fn new(api: SharedApi, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_validator(api, navigator, Box::new(SignUpSchema))
    }

    pub fn with_validator(
        api: SharedApi,
        navigator: Arc<dyn Navigator>,
        validator: Box<dyn Validator<SignUpForm> + Send + Sync>,
    ) -> Self {
        Self {
            api,
            navigator,
            validator,
            errors: FieldErrors::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub async fn submit(&mut self, form: SignUpForm) -> FormOutcome {
        self.errors = FieldErrors::new();

        if let Err(errors) = self.validator.validate(&form) {
            self.errors = errors;
            self.navigator.alert(Failure::SignUp.alert());
            return FormOutcome::Invalid;
        }

        match self.api.sign_up(&form).await {
            Ok(user) => {
                info!("Created account {}", user.id);
                self.navigator.alert(alerts::account_created());
                self.navigator.go_back();
                FormOutcome::Saved
            }
            Err(err) => {
                self.navigator.alert(alerts::report(Failure::SignUp, &err));
                FormOutcome::Failed
            }
        }
    }
}
