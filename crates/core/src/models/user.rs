use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Sign-up form contents, sent as-is to `POST users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    /// A password change is requested whenever the current password is filled in.
    pub fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }

    pub fn to_request(&self) -> UpdateProfileRequest {
        let password_field = |value: &String| self.changes_password().then(|| value.clone());

        UpdateProfileRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            old_password: password_field(&self.old_password),
            password: password_field(&self.password),
            password_confirmation: password_field(&self.password_confirmation),
        }
    }
}

/// Body of `PUT profile`. Password fields are omitted unless the user is
/// changing their password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

/// An image picked on the device, ready for `PATCH users/avatar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Avatars are always uploaded as `{user_id}.jpg`.
    pub fn jpeg_for(user: &User, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{}.jpg", user.id),
            content_type: "image/jpeg".to_string(),
            bytes,
        }
    }
}
