//! Client-held session: the bearer token and the user it belongs to.
//!
//! Both live in session storage under fixed keys so that a reload, or a
//! second tab, picks up the same session.

use std::rc::Rc;

use agri_types::User;

use crate::platform::SessionStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// An authenticated operator
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: String,
    pub user: User,
}

/// What the UI knows about the session.
///
/// `Pending` covers the window between the first (server-rendered) paint and
/// the moment storage has been read in the browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthStatus {
    #[default]
    Pending,
    SignedOut,
    SignedIn(AuthState),
}

impl AuthStatus {
    pub fn from_restored(state: Option<AuthState>) -> Self {
        match state {
            Some(state) => AuthStatus::SignedIn(state),
            None => AuthStatus::SignedOut,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthStatus::SignedIn(state) => Some(&state.user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::SignedIn(_))
    }
}

/// Storage-backed session shared by the API client and the auth context
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Read the persisted session. Both keys must be present and the user
    /// must decode; anything else counts as signed out.
    pub fn restore(&self) -> Option<AuthState> {
        let token = self.token()?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(AuthState { token, user }),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {}", e);
                None
            }
        }
    }

    pub fn persist(&self, state: &AuthState) -> Result<(), serde_json::Error> {
        let user = serde_json::to_string(&state.user)?;
        self.storage.set(TOKEN_KEY, &state.token);
        self.storage.set(USER_KEY, &user);
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
