//! Error types for API calls and the auth flow

use agri_types::ErrorBody;
use thiserror::Error;

/// Failure of a single REST call.
///
/// Nothing is retried: every variant is terminal for the user action that
/// triggered it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from the backend. The session has already been cleared and the
    /// browser sent to `/login` by the time the caller sees this.
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("session expired"))]
    Unauthorized { message: Option<String> },
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an error from a non-2xx response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.text().map(str::to_string));
        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }

    /// Server-provided message, if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Unauthorized { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text to show the user: the server's message, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Login or registration failure with a message ready for display
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_server_error() {
        let err = ApiError::from_status(400, r#"{"error": "Sensor ID already exists"}"#);
        assert_eq!(err.server_message(), Some("Sensor ID already exists"));
        assert_eq!(
            err.user_message("Error saving sensor"),
            "Sensor ID already exists"
        );
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Error saving sensor"), "Error saving sensor");
        assert_eq!(err.to_string(), "HTTP 502: request failed");
    }

    #[test]
    fn test_401_becomes_unauthorized_with_message() {
        let err = ApiError::from_status(401, r#"{"error": "Invalid credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_transport_error_uses_fallback() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Error resolving alert"), "Error resolving alert");
    }
}
