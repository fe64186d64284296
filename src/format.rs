//! Display formatting for backend timestamps and reading values.
//!
//! The backend emits naive ISO-8601 (`2024-05-02T10:15:00.123456`) or, from
//! some endpoints, RFC 3339 with an offset. Anything unparseable is shown
//! verbatim.

use agri_types::SensorStatus;
use chrono::{DateTime, NaiveDateTime};

fn parse(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// `HH:MM`, used for chart axis labels
pub fn time_of_day(timestamp: &str) -> String {
    parse(timestamp)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// `DD/MM/YYYY HH:MM`
pub fn date_time(timestamp: &str) -> String {
    parse(timestamp)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Reading value with unit, or a dash when the value is missing
pub fn reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{:.1}", v),
        Some(v) => format!("{:.1} {}", v, unit),
        None => "—".to_string(),
    }
}

/// CSS class and text of a sensor status badge
pub fn status_badge(status: &SensorStatus) -> (String, String) {
    (format!("badge {}", status.as_str()), status.label().to_string())
}
