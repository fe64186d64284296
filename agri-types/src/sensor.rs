//! Sensor definitions.
//!
//! A sensor is the registered device record (name, kind, location, status).
//! Its measurements live in [`crate::reading`].

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// What a sensor measures. Kinds the dashboard has no icon for are kept
/// verbatim so that saving an edit sends them back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SensorType {
    #[default]
    Temperature,
    Humidity,
    SoilMoisture,
    Light,
    Other(String),
}

impl SensorType {
    /// Kinds offered in the sensor form, in display order
    pub const SELECTABLE: [SensorType; 4] = [
        SensorType::Temperature,
        SensorType::Humidity,
        SensorType::SoilMoisture,
        SensorType::Light,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::SoilMoisture => "soil_moisture",
            Self::Light => "light",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::SoilMoisture => "Soil moisture",
            Self::Light => "Light",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SensorType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "temperature" => Self::Temperature,
            "humidity" => Self::Humidity,
            "soil_moisture" => Self::SoilMoisture,
            "light" => Self::Light,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for SensorType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SensorType> for String {
    fn from(kind: SensorType) -> Self {
        match kind {
            SensorType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Operational status of a sensor. Only active sensors report latest data.
///
/// Statuses outside the known three (e.g. `offline`) are kept as `Unknown`
/// with the backend's spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SensorStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Unknown(String),
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 3] = [
        SensorStatus::Active,
        SensorStatus::Inactive,
        SensorStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Maintenance => "maintenance",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SensorStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "maintenance" => Self::Maintenance,
            _ => Self::Unknown(s.to_string()),
        }
    }
}

impl From<String> for SensorStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SensorStatus> for String {
    fn from(status: SensorStatus) -> Self {
        match status {
            SensorStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A registered sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sensor {
    /// Database key, used in `/sensors/{id}` paths
    pub id: i64,

    /// Stable external key the device reports under. Immutable once created.
    pub sensor_id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: SensorType,

    #[serde(default)]
    pub location: Option<String>,

    pub status: SensorStatus,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Most recent reading; only present on `/sensor-data/latest`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_data: Option<Reading>,
}

/// Body of `POST /sensors` and `PUT /sensors/{id}`.
///
/// Optional text fields serialize as `null` so that clearing them in the
/// form clears them server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorPayload {
    pub sensor_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SensorType,
    pub location: Option<String>,
    pub status: SensorStatus,
    pub description: Option<String>,
}

/// `GET /sensors`, `GET /sensor-data/latest`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorList {
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /sensors/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorEnvelope {
    pub sensor: Sensor,
}

/// `POST /sensors`, `PUT /sensors/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorMutation {
    #[serde(default)]
    pub message: String,
    pub sensor: Sensor,
}
