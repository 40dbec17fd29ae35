use std::sync::Arc;

use gobarber_client::SharedApi;
use gobarber_core::models::provider::Provider;
use tracing::{debug, warn};

use crate::{
    auth::AuthContext,
    navigation::{Navigator, Route},
};

/// Landing screen: greets the user and lists the providers to book with.
pub struct Dashboard {
    api: SharedApi,
    navigator: Arc<dyn Navigator>,
    auth: AuthContext,
    providers: Vec<Provider>,
    load_failed: bool,
}

impl Dashboard {
    pub fn new(api: SharedApi, navigator: Arc<dyn Navigator>, auth: AuthContext) -> Self {
        Self {
            api,
            navigator,
            auth,
            providers: Vec::new(),
            load_failed: false,
        }
    }

    /// Fetch the provider list, replacing whatever was shown before.
    pub async fn load(&mut self) {
        match self.api.list_providers().await {
            Ok(providers) => {
                debug!("Dashboard loaded {} providers", providers.len());
                self.providers = providers;
                self.load_failed = false;
            }
            Err(err) => {
                warn!("Dashboard failed to load providers: {}", err);
                self.providers.clear();
                self.load_failed = true;
            }
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Name shown in the greeting
    pub async fn user_name(&self) -> Option<String> {
        self.auth.user().await.map(|user| user.name)
    }

    pub async fn user_avatar(&self) -> Option<String> {
        self.auth.user().await.and_then(|user| user.avatar_url)
    }

    pub fn open_provider(&self, provider_id: &str) {
        self.navigator.navigate(Route::CreateAppointment {
            provider_id: provider_id.to_string(),
        });
    }

    pub fn open_profile(&self) {
        self.navigator.navigate(Route::Profile);
    }

    pub async fn sign_out(&self) {
        self.auth.sign_out().await;
    }
}
