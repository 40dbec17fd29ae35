use std::sync::Arc;

use gobarber_core::models::user::User;
use tokio::sync::RwLock;
use tracing::info;

/// The signed-in user, shared by every screen.
///
/// Cloning gives another handle to the same user.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Arc<RwLock<Option<User>>>,
}

impl AuthContext {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }

    pub async fn user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Replace the stored user with a fresh copy from the API
    pub async fn update_user(&self, user: User) {
        info!("Updating signed-in user {}", user.id);
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }
}
