//! Alerts page component.
//!
//! Filterable alert list with resolve and delete.

use dioxus::prelude::*;

use agri_types::{Alert, Severity};

use crate::app::components::Layout;
use crate::app::context::use_api;
use crate::format;
use crate::platform::dialog;
use crate::views::alerts::{
    self, AlertFilter, ResolutionFilter, DELETE_CONFIRMATION, DELETE_FALLBACK, RESOLVE_FALLBACK,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AlertAction {
    Resolve,
    Delete,
}

/// Alerts page component.
#[component]
pub fn Alerts() -> Element {
    let client = use_api();

    let mut filter = use_signal(AlertFilter::default);
    let mut list = use_signal(|| None::<Vec<Alert>>);

    // Restarts (dropping any request in flight) whenever the filter changes
    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        let current = filter();
        async move {
            match alerts::load(&client, &current).await {
                Ok(fetched) => list.set(Some(fetched)),
                Err(e) => {
                    tracing::warn!("Error fetching alerts: {}", e);
                    if list.peek().is_none() {
                        list.set(Some(Vec::new()));
                    }
                }
            }
        }
    });

    let act = move |(action, id): (AlertAction, i64)| {
        if action == AlertAction::Delete && !dialog::confirm(DELETE_CONFIRMATION) {
            return;
        }
        let client = client.clone();
        let applied = *filter.peek();
        spawn(async move {
            let (result, fallback) = match action {
                AlertAction::Resolve => (
                    alerts::resolve_and_reload(&client, id, &applied).await,
                    RESOLVE_FALLBACK,
                ),
                AlertAction::Delete => (
                    alerts::delete_and_reload(&client, id, &applied).await,
                    DELETE_FALLBACK,
                ),
            };
            match result {
                // A filter change since the click has its own fetch running
                Ok(Some(fetched)) if *filter.peek() == applied => list.set(Some(fetched)),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(id, "{}: {}", fallback, e);
                    dialog::alert(&e.user_message(fallback));
                }
            }
        });
    };

    let current = filter();

    let content = match list() {
        None => rsx! {
            article { aria_busy: "true", "Loading alerts..." }
        },
        Some(items) if items.is_empty() => rsx! {
            article { class: "empty", "No alerts" }
        },
        Some(items) => rsx! {
            for alert in items.iter() {
                AlertCard {
                    key: "{alert.id}",
                    alert: alert.clone(),
                    on_action: act.clone(),
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Alerts".to_string(),
            nav_active: "alerts".to_string(),

            h1 { "Alerts" }

            article { class: "filters",
                label {
                    "Status"
                    select {
                        value: current.resolution.as_param(),
                        onchange: move |e: FormEvent| {
                            let resolution = ResolutionFilter::from_param(&e.value());
                            filter.with_mut(|f| f.resolution = resolution);
                        },
                        for resolution in ResolutionFilter::ALL {
                            option {
                                value: resolution.as_param(),
                                selected: resolution == current.resolution,
                                {resolution.label()}
                            }
                        }
                    }
                }
                label {
                    "Severity"
                    select {
                        onchange: move |e: FormEvent| {
                            let severity = Severity::parse(&e.value());
                            filter.with_mut(|f| f.severity = severity);
                        },
                        option { value: "", selected: current.severity.is_none(), "All" }
                        for severity in Severity::ALL {
                            option {
                                value: severity.as_str(),
                                selected: current.severity == Some(severity),
                                {severity.label()}
                            }
                        }
                    }
                }
            }

            {content}
        }
    }
}

#[component]
fn AlertCard(alert: Alert, on_action: EventHandler<(AlertAction, i64)>) -> Element {
    let id = alert.id;
    let card_class = if alert.is_resolved {
        "alert-card resolved"
    } else {
        "alert-card"
    };
    let severity_class = format!("badge {}", alert.severity.as_str());
    let severity = alert.severity.label();
    let source = alert
        .sensor
        .as_ref()
        .map(|s| format!("{} ({})", s.name, s.sensor_id));
    let threshold = alert.threshold_value.map(|v| format!("Threshold: {:.1}", v));
    let actual = alert.actual_value.map(|v| format!("Measured: {:.1}", v));
    let created = format::date_time(&alert.created_at);
    let resolved_at = alert.resolved_at.as_deref().map(format::date_time);

    rsx! {
        article { class: "{card_class}",
            header {
                span { class: "{severity_class}", "{severity}" }
                " "
                if alert.is_resolved {
                    span { class: "badge resolved", "Resolved" }
                }
                if let Some(kind) = alert.alert_type.as_ref() {
                    " "
                    small { "{kind}" }
                }
            }
            p { strong { "{alert.message}" } }
            if let Some(source) = source {
                p { small { "Sensor: {source}" } }
            }
            div { class: "stats",
                if let Some(threshold) = threshold {
                    small { "{threshold}" }
                }
                if let Some(actual) = actual {
                    small { "{actual}" }
                }
                small { "Raised {created}" }
                if let Some(resolved_at) = resolved_at {
                    small { "Resolved {resolved_at}" }
                }
            }
            footer { class: "controls",
                if !alert.is_resolved {
                    button {
                        onclick: move |_| on_action.call((AlertAction::Resolve, id)),
                        "Resolve"
                    }
                }
                button {
                    class: "outline secondary",
                    onclick: move |_| on_action.call((AlertAction::Delete, id)),
                    "Delete"
                }
            }
        }
    }
}
