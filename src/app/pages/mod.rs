//! Dioxus fullstack page components.
//!
//! Pages own their signals and delegate all backend work to
//! [`crate::views`].

mod alerts;
mod dashboard;
mod login;
mod register;
mod sensors;

pub use alerts::Alerts;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use sensors::Sensors;
