//! Sensor readings and 24h statistics.

use serde::{Deserialize, Deserializer, Serialize};

use crate::sensor::Sensor;

/// A single timestamped measurement.
///
/// The backend stores values encrypted and decrypts them on the way out, so
/// `value` arrives as a decimal string, occasionally as a number, and as
/// `null` when decryption failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub id: i64,

    /// Database key of the owning sensor (not the external `sensor_id`)
    pub sensor_id: i64,

    #[serde(default, deserialize_with = "lenient_value")]
    pub value: Option<f64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub unit: String,

    /// ISO-8601 timestamp as produced by the backend (naive UTC)
    pub timestamp: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawValue::Number(n)) => Some(n),
        Some(RawValue::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /sensor-data`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReadingList {
    #[serde(default)]
    pub data: Vec<Reading>,
    #[serde(default)]
    pub total: usize,
}

/// Body of `POST /sensor-data`. `sensor_id` is the external key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReading {
    pub sensor_id: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// `POST /sensor-data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingCreated {
    #[serde(default)]
    pub message: String,
    pub data: Reading,
}

/// Aggregate over the last 24 hours of readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: u64,
}

/// `GET /sensor-data/stats/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub sensor: Sensor,
    /// `None` when the sensor produced no readings in the window
    #[serde(default)]
    pub stats: Option<SensorStats>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
