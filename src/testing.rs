//! Scripted backend for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use agri_types::{Role, User};
use async_trait::async_trait;

use crate::client::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::error::ApiError;
use crate::platform::{MemoryNavigator, MemoryStorage};
use crate::session::{AuthState, Session};

pub const BASE_URL: &str = "http://farm.test/api";

struct Route {
    method: Method,
    path: String,
    status: u16,
    body: String,
}

/// Answers requests from a route table and records every request it sees
#[derive(Default)]
pub struct ScriptedTransport {
    routes: RefCell<Vec<Route>>,
    log: RefCell<Vec<HttpRequest>>,
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.log.borrow_mut().push(request.clone());

        let relative = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let path = relative.split('?').next().unwrap_or(relative);

        // Most recently scripted route wins
        self.routes
            .borrow()
            .iter()
            .rev()
            .find(|r| r.method == request.method && r.path == path)
            .map(|r| HttpResponse {
                status: r.status,
                body: r.body.clone(),
            })
            .ok_or_else(|| ApiError::Transport(format!("unscripted {} {}", request.method, path)))
    }
}

pub struct TestBackend {
    pub client: ApiClient,
    pub transport: Rc<ScriptedTransport>,
    pub storage: Rc<MemoryStorage>,
    pub navigator: Rc<MemoryNavigator>,
}

impl TestBackend {
    pub fn new() -> Self {
        let transport = Rc::new(ScriptedTransport::default());
        let storage = Rc::new(MemoryStorage::new());
        let navigator = Rc::new(MemoryNavigator::new());
        let client = ApiClient::new(
            BASE_URL,
            transport.clone(),
            Session::new(storage.clone()),
            navigator.clone(),
        );
        Self {
            client,
            transport,
            storage,
            navigator,
        }
    }

    pub fn sign_in(&self, token: &str) {
        let state = AuthState {
            token: token.to_string(),
            user: sample_user(),
        };
        self.client
            .session()
            .persist(&state)
            .expect("persist test session");
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.transport.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.transport.log.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    /// `"METHOD /path?query"` for every request, relative to the base URL
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| {
                let relative = r.url.strip_prefix(BASE_URL).unwrap_or(&r.url);
                format!("{} {}", r.method, relative)
            })
            .collect()
    }
}

pub fn sample_user() -> User {
    User {
        id: 1,
        username: "admin".to_string(),
        email: Some("admin@farm.test".to_string()),
        role: Role::Admin,
    }
}

pub fn sensor_json(id: i64, sensor_id: &str, name: &str, kind: &str) -> String {
    format!(
        r#"{{"id": {id}, "sensor_id": "{sensor_id}", "name": "{name}", "type": "{kind}",
            "location": "Field 1", "status": "active", "description": null}}"#
    )
}

pub fn latest_sensor_json(id: i64, name: &str, value: &str, unit: &str) -> String {
    format!(
        r#"{{"id": {id}, "sensor_id": "S{id}", "name": "{name}", "type": "temperature",
            "location": null, "status": "active", "description": null,
            "latest_data": {{"id": {reading}, "sensor_id": {id}, "value": "{value}",
                             "unit": "{unit}", "timestamp": "2024-05-02T10:15:00"}}}}"#,
        reading = id * 100
    )
}

pub fn alert_json(id: i64, severity: &str, resolved: bool) -> String {
    format!(
        r#"{{"id": {id}, "sensor_id": 1, "message": "Alert {id}", "severity": "{severity}",
            "threshold_value": 30.0, "actual_value": 31.5, "is_resolved": {resolved},
            "created_at": "2024-05-02T10:15:00", "resolved_at": null}}"#
    )
}
