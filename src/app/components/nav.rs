//! Navigation bar: page links, current user and logout.

use dioxus::prelude::*;

use crate::app::context::use_auth;
use crate::app::Route;

/// Navigation bar with the signed-in user on the right.
#[component]
pub fn Nav(active: String) -> Element {
    let auth = use_auth();
    let nav = navigator();
    let identity = auth.user().map(|u| (u.username, u.role.label()));

    let link_class = |page: &str| if active == page { "contrast" } else { "secondary" };

    let logout = move |_| {
        auth.logout();
        nav.replace(Route::Login {});
    };

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::Dashboard {}, strong { "Agri Monitor" } }
                }
            }
            ul {
                li { Link { class: link_class("dashboard"), to: Route::Dashboard {}, "Dashboard" } }
                li { Link { class: link_class("sensors"), to: Route::Sensors {}, "Sensors" } }
                li { Link { class: link_class("alerts"), to: Route::Alerts {}, "Alerts" } }
            }
            ul {
                if let Some((username, role)) = identity {
                    li {
                        span { "{username} " }
                        small { "{role}" }
                    }
                }
                li {
                    button { class: "outline secondary", onclick: logout, "Log out" }
                }
            }
        }
    }
}
