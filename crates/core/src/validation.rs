//! Form validation.
//!
//! Screens validate their input through the [`Validator`] trait and get back
//! every failing field at once, keyed by field name, so the form can mark
//! each input independently.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::user::{ProfileForm, SignUpForm};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first message for a field wins.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub trait Validator<T> {
    fn validate(&self, input: &T) -> Result<(), FieldErrors>;
}

fn check_name(errors: &mut FieldErrors, name: &str) {
    if name.trim().is_empty() {
        errors.add("name", "Name is required");
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "E-mail is required");
    } else if !EMAIL_RE.is_match(email.trim()) {
        errors.add("email", "Enter a valid e-mail");
    }
}

/// Rules for the sign-up form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignUpSchema;

impl Validator<SignUpForm> for SignUpSchema {
    fn validate(&self, form: &SignUpForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_name(&mut errors, &form.name);
        check_email(&mut errors, &form.email);
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "At least 6 characters");
        }

        errors.into_result()
    }
}

/// Rules for the profile form.
///
/// The password fields only become mandatory once the current password is
/// filled in. The confirmation must always equal the new password.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSchema;

impl Validator<ProfileForm> for ProfileSchema {
    fn validate(&self, form: &ProfileForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_name(&mut errors, &form.name);
        check_email(&mut errors, &form.email);

        if form.changes_password() {
            if form.password.is_empty() {
                errors.add("password", "New password is required");
            }
            if form.password_confirmation.is_empty() {
                errors.add("password_confirmation", "Confirmation is required");
            }
        }
        if form.password_confirmation != form.password {
            errors.add("password_confirmation", "Passwords must match");
        }

        errors.into_result()
    }
}
