//! `/alerts`

use agri_types::alert::{AlertEnvelope, AlertList};
use agri_types::{Alert, AlertsSummary, MessageResponse, Severity};

use super::{ApiClient, Query};
use crate::error::ApiError;

/// Optional filters for `GET /alerts`. Unset fields are not sent at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertQuery {
    pub sensor_id: Option<i64>,
    pub is_resolved: Option<bool>,
    pub severity: Option<Severity>,
    pub limit: Option<u32>,
}

impl AlertQuery {
    fn pairs(&self) -> Query {
        let mut query = Query::new();
        if let Some(id) = self.sensor_id {
            query.push(("sensor_id", id.to_string()));
        }
        if let Some(resolved) = self.is_resolved {
            query.push(("is_resolved", resolved.to_string()));
        }
        if let Some(severity) = self.severity {
            query.push(("severity", severity.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

pub struct AlertsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AlertsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /alerts
    pub async fn list(&self, query: &AlertQuery) -> Result<Vec<Alert>, ApiError> {
        let list: AlertList = self.client.get_json("/alerts", &query.pairs()).await?;
        Ok(list.alerts)
    }

    /// GET /alerts/{id}
    pub async fn get(&self, id: i64) -> Result<Alert, ApiError> {
        let envelope: AlertEnvelope = self
            .client
            .get_json(&format!("/alerts/{}", id), &[])
            .await?;
        Ok(envelope.alert)
    }

    /// PUT /alerts/{id}/resolve
    pub async fn resolve(&self, id: i64) -> Result<Alert, ApiError> {
        let envelope: AlertEnvelope = self
            .client
            .put_json::<(), _>(&format!("/alerts/{}/resolve", id), None)
            .await?;
        Ok(envelope.alert)
    }

    /// DELETE /alerts/{id}
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self.client.delete_json(&format!("/alerts/{}", id)).await?;
        Ok(())
    }

    /// GET /alerts/summary
    pub async fn summary(&self) -> Result<AlertsSummary, ApiError> {
        self.client.get_json("/alerts/summary", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::{alert_json, TestBackend};

    #[tokio::test]
    async fn test_empty_query_sends_no_params() {
        let backend = TestBackend::new();
        backend.respond(Method::Get, "/alerts", 200, r#"{"alerts": [], "total": 0}"#);

        backend.client.alerts().list(&AlertQuery::default()).await.unwrap();

        assert_eq!(backend.calls(), vec!["GET /alerts".to_string()]);
    }

    #[tokio::test]
    async fn test_resolve_sends_no_body() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Put,
            "/alerts/42/resolve",
            200,
            &format!(r#"{{"message": "resolved", "alert": {}}}"#, alert_json(42, "critical", true)),
        );

        let alert = backend.client.alerts().resolve(42).await.unwrap();

        assert!(alert.is_resolved);
        assert_eq!(backend.last_request().body, None);
        assert_eq!(backend.calls(), vec!["PUT /alerts/42/resolve".to_string()]);
    }

    #[tokio::test]
    async fn test_get_unwraps_envelope() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Get,
            "/alerts/7",
            200,
            &format!(r#"{{"alert": {}}}"#, alert_json(7, "warning", false)),
        );

        let alert = backend.client.alerts().get(7).await.unwrap();
        assert_eq!(alert.severity, Severity::Warning);
    }
}
