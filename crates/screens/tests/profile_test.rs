mod test_utils;

use std::sync::Arc;

use gobarber_client::{mock::MockBarberApi, SharedApi};
use gobarber_core::{
    errors::BookError,
    models::user::{ProfileForm, User},
    validation::{FieldErrors, Validator},
};
use gobarber_screens::{
    alerts::{self, Failure},
    auth::AuthContext,
    navigation::Signal,
    screens::{
        profile::{AvatarPick, Profile},
        FormOutcome,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::test_utils::{drain, signals, user};

fn renamed() -> User {
    User {
        name: "Ana Souza".to_string(),
        ..user()
    }
}

fn form(old_password: &str, password: &str, confirmation: &str) -> ProfileForm {
    ProfileForm {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        old_password: old_password.to_string(),
        password: password.to_string(),
        password_confirmation: confirmation.to_string(),
    }
}

#[rstest]
#[case(form("", "", ""), false)]
#[case(form("123456", "abcdef", "abcdef"), true)]
#[tokio::test]
async fn test_submit_updates_shared_user(#[case] form: ProfileForm, #[case] sends_password: bool) {
    let mut api = MockBarberApi::new();
    api.expect_update_profile()
        .withf(move |request| request.password.is_some() == sends_password && request.name == "Ana Souza")
        .times(1)
        .returning(|_| Ok(renamed()));
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();
    let auth = AuthContext::signed_in(user());

    let mut screen = Profile::new(api, navigator, auth.clone());
    let outcome = screen.submit(form).await;

    assert_eq!(outcome, FormOutcome::Saved);
    assert_eq!(auth.user().await, Some(renamed()));
    assert_eq!(
        drain(&mut rx),
        vec![Signal::Alert(alerts::profile_updated()), Signal::GoBack]
    );
}

#[tokio::test]
async fn test_mismatched_confirmation_is_rejected() {
    let mut api = MockBarberApi::new();
    api.expect_update_profile().never();
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();

    let mut screen = Profile::new(api, navigator, AuthContext::signed_in(user()));
    let outcome = screen.submit(form("123456", "abcdef", "fedcba")).await;

    assert_eq!(outcome, FormOutcome::Invalid);
    assert_eq!(screen.errors().get("password_confirmation"), Some("Passwords must match"));
    assert_eq!(drain(&mut rx), vec![Signal::Alert(Failure::UpdateProfile.alert())]);
}

/// Rejects any name other than the account owner's
struct OwnerNameOnly;

impl Validator<ProfileForm> for OwnerNameOnly {
    fn validate(&self, form: &ProfileForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if form.name != "Ana" {
            errors.add("name", "Name cannot change");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[tokio::test]
async fn test_custom_validator_replaces_profile_schema() {
    let mut api = MockBarberApi::new();
    api.expect_update_profile().never();
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();

    let mut screen = Profile::with_validator(
        api,
        navigator,
        AuthContext::signed_in(user()),
        Box::new(OwnerNameOnly),
    );
    let outcome = screen.submit(form("", "", "")).await;

    assert_eq!(outcome, FormOutcome::Invalid);
    assert_eq!(screen.errors().get("name"), Some("Name cannot change"));
    assert_eq!(drain(&mut rx), vec![Signal::Alert(Failure::UpdateProfile.alert())]);
}

#[tokio::test]
async fn test_api_failure_keeps_user() {
    let mut api = MockBarberApi::new();
    api.expect_update_profile()
        .times(1)
        .returning(|_| Err(BookError::Api { status: 400, message: "Old password does not match".to_string() }));
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();
    let auth = AuthContext::signed_in(user());

    let mut screen = Profile::new(api, navigator, auth.clone());
    let outcome = screen.submit(form("wrong1", "abcdef", "abcdef")).await;

    assert_eq!(outcome, FormOutcome::Failed);
    assert_eq!(auth.user().await, Some(user()));
    assert_eq!(drain(&mut rx), vec![Signal::Alert(Failure::UpdateProfile.alert())]);
}

#[tokio::test]
async fn test_avatar_upload_replaces_user() {
    let with_avatar = User {
        avatar_url: Some("http://localhost:3333/files/u1.jpg".to_string()),
        ..user()
    };
    let returned = with_avatar.clone();
    let mut api = MockBarberApi::new();
    api.expect_update_avatar()
        .withf(|upload| upload.file_name == "u1.jpg" && upload.content_type == "image/jpeg")
        .times(1)
        .returning(move |_| Ok(returned.clone()));
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();
    let auth = AuthContext::signed_in(user());

    let screen = Profile::new(api, navigator, auth.clone());
    screen.update_avatar(AvatarPick::Picked(vec![0xff, 0xd8, 0xff])).await;

    assert_eq!(auth.user().await, Some(with_avatar));
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_cancelled_avatar_pick_does_nothing() {
    let mut api = MockBarberApi::new();
    api.expect_update_avatar().never();
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();

    let screen = Profile::new(api, navigator, AuthContext::signed_in(user()));
    screen.update_avatar(AvatarPick::Cancelled).await;

    assert!(drain(&mut rx).is_empty());
}

#[rstest]
#[case(AvatarPick::Failed("camera unavailable".to_string()), false)]
#[case(AvatarPick::Picked(vec![1, 2, 3]), true)]
#[tokio::test]
async fn test_avatar_failures_alert(#[case] pick: AvatarPick, #[case] reaches_api: bool) {
    let mut api = MockBarberApi::new();
    api.expect_update_avatar()
        .times(usize::from(reaches_api))
        .returning(|_| Err(BookError::Transport(eyre::eyre!("connection reset"))));
    let api: SharedApi = Arc::new(api);
    let (navigator, mut rx) = signals();

    let screen = Profile::new(api, navigator, AuthContext::signed_in(user()));
    screen.update_avatar(pick).await;

    assert_eq!(drain(&mut rx), vec![Signal::Alert(Failure::UpdateAvatar.alert())]);
}
