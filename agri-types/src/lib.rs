//! Wire types for the agricultural monitoring REST API.
//!
//! Everything here is server-owned data: the dashboard only decodes it,
//! displays it, and posts the occasional payload back.
//!
//! # Modules
//! - [`user`] - Users, roles and the auth exchange
//! - [`sensor`] - Sensor definitions and the create/update payload
//! - [`reading`] - Sensor readings and 24h statistics
//! - [`alert`] - Threshold alerts and the summary aggregate
//! - [`envelope`] - Response envelopes shared by every resource group

pub mod alert;
pub mod envelope;
pub mod reading;
pub mod sensor;
pub mod user;

// Re-export commonly used types at crate root
pub use alert::{Alert, AlertsSummary, Severity};
pub use envelope::{ErrorBody, MessageResponse};
pub use reading::{NewReading, Reading, SensorStats, StatsResponse};
pub use sensor::{Sensor, SensorPayload, SensorStatus, SensorType};
pub use user::{AuthResponse, Credentials, RegisterRequest, Role, User, UserUpdate};
