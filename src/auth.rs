//! Login, registration and logout on top of the stored session.

use agri_types::{AuthResponse, Credentials, RegisterRequest};

use crate::client::ApiClient;
use crate::error::{ApiError, AuthFailure};
use crate::session::AuthState;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Auth operations. Successful logins and registrations are persisted to
/// session storage; failures come back as a displayable [`AuthFailure`].
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Session persisted by an earlier visit, if any
    pub fn restore(&self) -> Option<AuthState> {
        self.client.session().restore()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthState, AuthFailure> {
        let result = self.client.auth().login(credentials).await;
        self.establish(result, LOGIN_FALLBACK)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthState, AuthFailure> {
        let result = self.client.auth().register(request).await;
        self.establish(result, REGISTER_FALLBACK)
    }

    /// Forget the session locally. The backend is not told.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        self.client.session().clear();
    }

    fn establish(
        &self,
        result: Result<AuthResponse, ApiError>,
        fallback: &str,
    ) -> Result<AuthState, AuthFailure> {
        match result {
            Ok(resp) => {
                let state = AuthState {
                    token: resp.access_token,
                    user: resp.user,
                };
                self.client.session().persist(&state).map_err(|e| {
                    tracing::error!("Failed to persist session: {}", e);
                    AuthFailure::new(fallback)
                })?;
                tracing::info!(user = %state.user.username, role = %state.user.role, "Signed in");
                Ok(state)
            }
            Err(e) => {
                tracing::warn!("{}: {}", fallback, e);
                Err(AuthFailure::new(e.user_message(fallback)))
            }
        }
    }
}
