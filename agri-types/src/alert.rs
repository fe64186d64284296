//! Threshold alerts and the dashboard summary.

use serde::{Deserialize, Serialize};

use crate::sensor::Sensor;

/// Alert severity, most urgent first
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// Parse a filter/select value. Anything unrecognised means "no severity".
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A server-raised alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: i64,

    #[serde(default)]
    pub sensor_id: Option<i64>,

    #[serde(default)]
    pub alert_type: Option<String>,

    pub message: String,

    pub severity: Severity,

    #[serde(default)]
    pub threshold_value: Option<f64>,

    #[serde(default)]
    pub actual_value: Option<f64>,

    #[serde(default)]
    pub is_resolved: bool,

    pub created_at: String,

    #[serde(default)]
    pub resolved_at: Option<String>,

    /// Owning sensor, embedded by the list and detail endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<Sensor>,
}

/// Server-computed alert counts (`GET /alerts/summary`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertsSummary {
    pub total: u64,
    pub unresolved: u64,
    /// Unresolved critical alerts
    pub critical: u64,
    /// Unresolved warnings
    #[serde(default)]
    pub warning: u64,
    pub resolved: u64,
}

/// `GET /alerts`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlertList {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /alerts/{id}`, `PUT /alerts/{id}/resolve`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub alert: Alert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("Warning"), Some(Severity::Warning));
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn test_alert_list_with_embedded_sensor() {
        let json = r#"{
            "alerts": [{
                "id": 42, "sensor_id": 1, "alert_type": "threshold_high",
                "message": "Temperature above 35", "severity": "critical",
                "threshold_value": 35.0, "actual_value": 37.2, "is_resolved": false,
                "created_at": "2024-05-02T10:15:00", "resolved_at": null,
                "sensor": {"id": 1, "sensor_id": "T1", "name": "Greenhouse",
                           "type": "temperature", "status": "active"}
            }],
            "total": 1
        }"#;
        let list: AlertList = serde_json::from_str(json).unwrap();
        let alert = &list.alerts[0];
        assert_eq!(alert.severity, Severity::Critical);
        assert_eq!(alert.actual_value, Some(37.2));
        assert_eq!(alert.sensor.as_ref().map(|s| s.sensor_id.as_str()), Some("T1"));
    }

    #[test]
    fn test_summary_without_warning_count() {
        let summary: AlertsSummary =
            serde_json::from_str(r#"{"total": 5, "unresolved": 3, "critical": 1, "resolved": 2}"#)
                .unwrap();
        assert_eq!(summary.warning, 0);
        assert_eq!(summary.resolved, 2);
    }
}
