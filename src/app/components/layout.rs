//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.status-disabled { color: var(--pico-muted-color); }
.tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.tile { margin: 0; text-align: center; }
.tile strong { display: block; font-size: 2rem; }
.tile.critical strong { color: var(--pico-del-color); }
.tile.resolved strong { color: var(--pico-ins-color); }
.sensor-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.sensor-grid article { margin: 0; cursor: pointer; }
.sensor-grid article.selected { outline: 2px solid var(--pico-primary); }
.badge { display: inline-block; padding: 0 0.5rem; border-radius: 1rem; font-size: 0.75rem; background: var(--pico-secondary-background); color: var(--pico-secondary-inverse); }
.badge.active, .badge.resolved { background: var(--pico-ins-color); }
.badge.maintenance, .badge.warning { background: #c9a400; }
.badge.inactive, .badge.info { background: var(--pico-muted-color); }
.badge.critical { background: var(--pico-del-color); }
.chart { width: 100%; height: 260px; }
.chart .axis { stroke: var(--pico-muted-border-color); }
.chart .series { stroke: var(--pico-primary); stroke-width: 2; }
.chart .tick { fill: var(--pico-muted-color); font-size: 11px; }
.stats { display: flex; gap: 1.5rem; }
.filters { display: flex; gap: 1rem; align-items: end; }
.filters label { flex: 1; }
.controls { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.controls button { margin: 0; padding: 0.5rem 1rem; }
.alert-card.resolved { opacity: 0.7; }
.empty { text-align: center; color: var(--pico-muted-color); padding: 2rem 0; }
.auth-card { max-width: 420px; margin: 4rem auto; }
.form-error { color: var(--pico-del-color); }
small { color: var(--pico-muted-color); }
"#;

fn head(title: &str) -> Element {
    let full_title = format!("{} - Agri Monitor", title);
    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout for signed-in pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        {head(&props.title)}

        // Body content
        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "Agri Monitor v{version}" }
        }
    }
}

/// Bare layout for the login and registration pages
#[component]
pub fn AuthLayout(title: String, children: Element) -> Element {
    rsx! {
        {head(&title)}
        main { class: "container",
            article { class: "auth-card",
                header {
                    h2 { "Agri Monitor" }
                    small { "Sensor monitoring for your fields" }
                }
                {children}
            }
        }
    }
}
