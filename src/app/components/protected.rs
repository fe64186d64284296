//! Login gate for the routes that need a session.

use dioxus::prelude::*;

use crate::app::context::use_auth;
use crate::app::Route;
use crate::session::AuthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not read yet
    Wait,
    RedirectToLogin,
    Render,
}

/// What to show for `route` given the session. Public routes always render,
/// whatever the session holds.
pub fn gate(route: &Route, status: &AuthStatus) -> GateDecision {
    if !route.requires_auth() {
        return GateDecision::Render;
    }
    match status {
        AuthStatus::Pending => GateDecision::Wait,
        AuthStatus::SignedOut => GateDecision::RedirectToLogin,
        AuthStatus::SignedIn(_) => GateDecision::Render,
    }
}

/// Router layout: renders the nested route only for a signed-in user,
/// otherwise sends the browser to `/login`.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let nav = navigator();
    let route = use_route::<Route>();

    let effect_auth = auth.clone();
    let effect_route = route.clone();
    use_effect(move || {
        if gate(&effect_route, &effect_auth.status()) == GateDecision::RedirectToLogin {
            nav.replace(Route::Login {});
        }
    });

    match gate(&route, &auth.status()) {
        GateDecision::Render => rsx! { Outlet::<Route> {} },
        GateDecision::Wait | GateDecision::RedirectToLogin => rsx! {
            main { class: "container", aria_busy: "true", "Loading..." }
        },
    }
}
