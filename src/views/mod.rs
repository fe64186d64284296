//! Page state and fetch orchestration, independent of any renderer.
//!
//! Pages in [`crate::app::pages`] own the signals; everything they do with
//! the backend goes through these functions so it can be tested natively.

pub mod alerts;
pub mod auth_forms;
pub mod dashboard;
pub mod sensors;
