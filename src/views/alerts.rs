//! Alert list filters and the resolve/delete flows.

use agri_types::{Alert, Severity};

use crate::client::{AlertQuery, ApiClient};
use crate::error::ApiError;

pub const RESOLVE_FALLBACK: &str = "Error resolving alert";
pub const DELETE_FALLBACK: &str = "Error deleting alert";
pub const DELETE_CONFIRMATION: &str = "Delete this alert?";

/// Resolution filter as offered by the status select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionFilter {
    #[default]
    Any,
    Unresolved,
    Resolved,
}

impl ResolutionFilter {
    pub const ALL: [ResolutionFilter; 3] = [
        ResolutionFilter::Any,
        ResolutionFilter::Unresolved,
        ResolutionFilter::Resolved,
    ];

    /// Select value: `""`, `"false"` or `"true"`
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Unresolved => "false",
            Self::Resolved => "true",
        }
    }

    pub fn from_param(s: &str) -> Self {
        match s {
            "false" => Self::Unresolved,
            "true" => Self::Resolved,
            _ => Self::Any,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "All",
            Self::Unresolved => "Unresolved",
            Self::Resolved => "Resolved",
        }
    }

    fn is_resolved(&self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Unresolved => Some(false),
            Self::Resolved => Some(true),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub resolution: ResolutionFilter,
    /// `None` shows every severity
    pub severity: Option<Severity>,
}

impl AlertFilter {
    /// Build from the two select values. Unknown severities mean "any".
    pub fn from_params(is_resolved: &str, severity: &str) -> Self {
        Self {
            resolution: ResolutionFilter::from_param(is_resolved),
            severity: Severity::parse(severity),
        }
    }

    pub fn query(&self) -> AlertQuery {
        AlertQuery {
            is_resolved: self.resolution.is_resolved(),
            severity: self.severity,
            ..Default::default()
        }
    }
}

pub async fn load(client: &ApiClient, filter: &AlertFilter) -> Result<Vec<Alert>, ApiError> {
    client.alerts().list(&filter.query()).await
}

async fn reload(client: &ApiClient, filter: &AlertFilter) -> Option<Vec<Alert>> {
    match load(client, filter).await {
        Ok(alerts) => Some(alerts),
        Err(e) => {
            tracing::warn!("Error fetching alerts: {}", e);
            None
        }
    }
}

/// Resolve, then refetch with the filter in force. `Ok(None)` means the
/// write worked but the refetch did not.
pub async fn resolve_and_reload(
    client: &ApiClient,
    id: i64,
    filter: &AlertFilter,
) -> Result<Option<Vec<Alert>>, ApiError> {
    client.alerts().resolve(id).await?;
    tracing::info!(id, "Alert resolved");
    Ok(reload(client, filter).await)
}

pub async fn delete_and_reload(
    client: &ApiClient,
    id: i64,
    filter: &AlertFilter,
) -> Result<Option<Vec<Alert>>, ApiError> {
    client.alerts().delete(id).await?;
    tracing::info!(id, "Alert deleted");
    Ok(reload(client, filter).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::{alert_json, TestBackend};

    #[tokio::test]
    async fn test_critical_unresolved_sends_exactly_two_params() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Get,
            "/alerts",
            200,
            &format!(r#"{{"alerts": [{}], "total": 1}}"#, alert_json(1, "critical", false)),
        );

        let filter = AlertFilter::from_params("false", "critical");
        let alerts = load(&backend.client, &filter).await.unwrap();

        assert_eq!(alerts.len(), 1);
        assert_eq!(
            backend.calls(),
            vec!["GET /alerts?is_resolved=false&severity=critical".to_string()]
        );
    }

    #[test]
    fn test_empty_selects_mean_no_filter() {
        let filter = AlertFilter::from_params("", "");
        assert_eq!(filter, AlertFilter::default());
        assert_eq!(filter.query(), AlertQuery::default());
    }

    #[test]
    fn test_resolution_param_round_trip() {
        for resolution in ResolutionFilter::ALL {
            assert_eq!(ResolutionFilter::from_param(resolution.as_param()), resolution);
        }
    }

    #[tokio::test]
    async fn test_resolve_then_refetch_filtered() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Put,
            "/alerts/42/resolve",
            200,
            &format!(r#"{{"message": "Alert resolved", "alert": {}}}"#, alert_json(42, "warning", true)),
        );
        backend.respond(Method::Get, "/alerts", 200, r#"{"alerts": [], "total": 0}"#);

        let filter = AlertFilter {
            resolution: ResolutionFilter::Unresolved,
            severity: None,
        };
        let alerts = resolve_and_reload(&backend.client, 42, &filter)
            .await
            .unwrap()
            .unwrap();

        assert!(alerts.is_empty());
        assert_eq!(
            backend.calls(),
            vec![
                "PUT /alerts/42/resolve".to_string(),
                "GET /alerts?is_resolved=false".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_resolve_does_not_refetch() {
        let backend = TestBackend::new();
        backend.respond(Method::Put, "/alerts/42/resolve", 404, r#"{"error": "Alert not found"}"#);

        let err = resolve_and_reload(&backend.client, 42, &AlertFilter::default())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(RESOLVE_FALLBACK), "Alert not found");
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_refetch() {
        let backend = TestBackend::new();
        backend.respond(Method::Delete, "/alerts/3", 200, r#"{"message": "Alert deleted"}"#);
        backend.respond(
            Method::Get,
            "/alerts",
            200,
            &format!(r#"{{"alerts": [{}], "total": 1}}"#, alert_json(4, "info", false)),
        );

        let filter = AlertFilter::from_params("", "info");
        let alerts = delete_and_reload(&backend.client, 3, &filter).await.unwrap().unwrap();

        assert_eq!(alerts[0].id, 4);
        assert_eq!(backend.calls()[1], "GET /alerts?severity=info");
    }
}
