//! HTTP transports.
//!
//! The client builds plain [`HttpRequest`]s and hands them to a transport:
//! `fetch` in the browser, `reqwest` on the server. Transports only move
//! bytes; status handling and the 401 policy live in [`super::ApiClient`].

use async_trait::async_trait;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute (or origin-relative, in the browser) URL including query
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Only network-level failures are errors; any HTTP
/// status, including 4xx/5xx, is a successful exchange.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `window.fetch`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        fn js_err(e: JsValue) -> ApiError {
            ApiError::Transport(format!("{:?}", e))
        }

        let opts = web_sys::RequestInit::new();
        opts.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let req = web_sys::Request::new_with_str_and_init(&request.url, &opts).map_err(js_err)?;
        for (name, value) in &request.headers {
            req.headers().set(name, value).map_err(js_err)?;
        }

        let window =
            web_sys::window().ok_or_else(|| ApiError::Transport("No window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_err)?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(js_err)?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// `reqwest` client used during server-side rendering
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to build HTTP client with custom config: {}. Using default.",
                    e
                );
                reqwest::Client::default()
            });
        Self { client }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Transport for builds with neither `fetch` nor `reqwest` available
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl HttpTransport for UnavailableTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport(format!(
            "No HTTP transport in this build ({} {})",
            request.method, request.url
        )))
    }
}
