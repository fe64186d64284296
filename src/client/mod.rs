//! REST client for the monitoring backend.
//!
//! One [`ApiClient`] is shared by the whole app. Resource groups hang off it
//! (`client.sensors().list(..)`, `client.alerts().resolve(..)`, ...) and all
//! of them go through [`ApiClient::send`], which:
//! - attaches `Authorization: Bearer <token>` when a token is stored
//! - on any 401 clears the stored session and redirects to `/login`
//! - turns every other non-2xx status into [`ApiError::Status`]
//!
//! Nothing is retried.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::platform::Navigator;
use crate::session::Session;

mod alerts;
mod auth;
mod readings;
mod sensors;
pub mod transport;
mod users;

pub use alerts::{AlertQuery, AlertsApi};
pub use auth::AuthApi;
pub use readings::{ReadingQuery, ReadingsApi};
pub use sensors::{SensorQuery, SensorsApi};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use users::UsersApi;

/// Route the 401 policy sends the browser to
pub const LOGIN_PATH: &str = "/login";

/// Query string pairs; only set parameters are included
pub type Query = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<Inner>,
}

struct Inner {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: Session,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        session: Session,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: Rc::new(Inner {
                base_url,
                transport,
                session,
                navigator,
            }),
        }
    }

    /// Client wired to this platform's transport, storage and navigation
    pub fn for_platform(base_url: impl Into<String>) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::platform::{BrowserNavigator, LocalStorage};
            ApiClient::new(
                base_url,
                Rc::new(transport::FetchTransport),
                Session::new(Rc::new(LocalStorage)),
                Rc::new(BrowserNavigator),
            )
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::platform::{MemoryNavigator, MemoryStorage};

            #[cfg(feature = "server")]
            let transport: Rc<dyn HttpTransport> = Rc::new(transport::ReqwestTransport::new());
            #[cfg(not(feature = "server"))]
            let transport: Rc<dyn HttpTransport> = Rc::new(transport::UnavailableTransport);

            ApiClient::new(
                base_url,
                transport,
                Session::new(Rc::new(MemoryStorage::new())),
                Rc::new(MemoryNavigator::new()),
            )
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn sensors(&self) -> SensorsApi<'_> {
        SensorsApi::new(self)
    }

    pub fn sensor_data(&self) -> ReadingsApi<'_> {
        ReadingsApi::new(self)
    }

    pub fn alerts(&self) -> AlertsApi<'_> {
        AlertsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// Perform one request and apply the response policy.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.inner.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: self.url(path, query),
            headers,
            body,
        };
        tracing::debug!(method = %request.method, url = %request.url, "API request");

        let response = self.inner.transport.execute(request).await?;
        tracing::debug!(status = response.status, path, "API response");

        if response.status == 401 {
            self.expire_session();
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    /// 401 policy: forget the session and go to the login page
    fn expire_session(&self) {
        tracing::info!("Received 401, clearing session");
        self.inner.session.clear();
        self.inner.navigator.navigate(LOGIN_PATH);
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, query, body).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        self.request_json(Method::Get, path, query, None).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request_json(Method::Post, path, &[], Some(body)).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = body.map(serde_json::to_string).transpose()?;
        self.request_json(Method::Put, path, &[], body).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json(Method::Delete, path, &[], None).await
    }
}
