//! `/auth/*`

use agri_types::user::UserEnvelope;
use agri_types::{AuthResponse, Credentials, RegisterRequest, User};

use super::ApiClient;
use crate::error::ApiError;

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.client.post_json("/auth/login", credentials).await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.post_json("/auth/register", request).await
    }

    /// GET /auth/me
    pub async fn me(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.client.get_json("/auth/me", &[]).await?;
        Ok(envelope.user)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Method;
    use crate::testing::TestBackend;
    use agri_types::Credentials;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Post,
            "/auth/login",
            200,
            r#"{"access_token": "t", "user": {"id": 1, "username": "admin", "role": "admin"}}"#,
        );

        let creds = Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        let resp = backend.client.auth().login(&creds).await.unwrap();
        assert_eq!(resp.access_token, "t");

        let req = backend.last_request();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "admin", "password": "admin123"}));
    }

    #[tokio::test]
    async fn test_me_unwraps_envelope() {
        let backend = TestBackend::new();
        backend.sign_in("t");
        backend.respond(
            Method::Get,
            "/auth/me",
            200,
            r#"{"user": {"id": 4, "username": "tech", "role": "technician"}}"#,
        );

        let user = backend.client.auth().me().await.unwrap();
        assert_eq!(user.username, "tech");
    }
}
