//! Agricultural IoT dashboard
//!
//! Browser front end for the sensor monitoring platform.
//!
//! This library provides:
//! - A REST client for the monitoring backend with bearer-token auth
//! - Session persistence and the login/registration flow
//! - Dashboard, sensor management and alert handling pages
//! - Web UI (Dioxus + Pico CSS), server-rendered and hydrated in the browser

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Not enabled: clippy::pedantic, clippy::nursery, clippy::cargo

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Shared logic (compiled for both WASM and native)
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod platform;
pub mod session;
pub mod views;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use error::{ApiError, AuthFailure};
