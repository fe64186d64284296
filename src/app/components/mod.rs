//! Shared UI components for the Dioxus fullstack web UI.

pub mod chart;
pub mod layout;
pub mod nav;
pub mod protected;

pub use chart::LineChart;
pub use layout::{AuthLayout, Layout};
pub use nav::Nav;
pub use protected::Protected;
