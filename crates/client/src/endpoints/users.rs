use eyre::WrapErr;
use gobarber_core::{
    errors::{BookError, BookResult},
    models::user::{AvatarUpload, SignUpForm, UpdateProfileRequest, User},
};
use reqwest::multipart::{Form, Part};

use crate::HttpApi;

pub async fn sign_up(api: &HttpApi, form: &SignUpForm) -> BookResult<User> {
    api.send(api.post("users").json(form)).await
}

pub async fn update_profile(api: &HttpApi, request: &UpdateProfileRequest) -> BookResult<User> {
    api.send(api.put("profile").json(request)).await
}

pub async fn update_avatar(api: &HttpApi, upload: AvatarUpload) -> BookResult<User> {
    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)
        .wrap_err("Invalid avatar content type")
        .map_err(BookError::Transport)?;
    let form = Form::new().part("avatar", part);

    api.send(api.patch("users/avatar").multipart(form)).await
}
