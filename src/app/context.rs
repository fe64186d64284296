//! App-wide context: the API client and the auth state.

use dioxus::prelude::*;
use agri_types::{Credentials, RegisterRequest, User};

use crate::auth::AuthService;
use crate::client::ApiClient;
use crate::config;
use crate::error::AuthFailure;
use crate::session::AuthStatus;

/// Shared handle on the signed-in state
#[derive(Clone)]
pub struct AuthHandle {
    status: Signal<AuthStatus>,
    service: AuthService,
}

impl AuthHandle {
    pub fn status(&self) -> AuthStatus {
        self.status.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.status.read().user().cloned()
    }

    /// Pick up a session persisted by an earlier visit
    fn restore(&self) {
        let mut status = self.status;
        status.set(AuthStatus::from_restored(self.service.restore()));
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthFailure> {
        let state = self.service.login(credentials).await?;
        let mut status = self.status;
        status.set(AuthStatus::SignedIn(state));
        Ok(())
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthFailure> {
        let state = self.service.register(request).await?;
        let mut status = self.status;
        status.set(AuthStatus::SignedIn(state));
        Ok(())
    }

    pub fn logout(&self) {
        self.service.logout();
        let mut status = self.status;
        status.set(AuthStatus::SignedOut);
    }
}

/// Install the API client and auth state at the app root.
///
/// Storage is only readable in the browser, so the session is restored in an
/// effect after hydration; until then the status is `Pending`.
pub fn use_app_provider() {
    let client = use_context_provider(|| ApiClient::for_platform(config::api_base_url()));
    let status = use_signal(AuthStatus::default);
    let auth = use_context_provider(move || AuthHandle {
        status,
        service: AuthService::new(client.clone()),
    });

    use_effect(move || auth.restore());
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}
