//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod context;
pub mod pages;

use components::Protected;
use context::use_app_provider;
use pages::{Alerts, Dashboard, Login, Register, Sensors};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // API client and auth state shared by every page
    use_app_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Protected)]
        #[route("/")]
        Dashboard {},
        #[route("/sensors")]
        Sensors {},
        #[route("/alerts")]
        Alerts {},
    #[end_layout]
    #[redirect("/:..segments", |segments: Vec<String>| Route::Dashboard {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

impl Route {
    /// Routes behind the login gate
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {} | Route::Sensors {} | Route::Alerts {}
        )
    }
}
