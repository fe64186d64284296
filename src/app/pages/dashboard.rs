//! Dashboard page component.
//!
//! Alert summary tiles, a card per active sensor with its latest reading and
//! the history chart of the selected sensor. Refreshes every 30 seconds
//! while mounted.

use dioxus::prelude::*;

use agri_types::{AlertsSummary, Sensor, SensorType};

use crate::app::components::{Layout, LineChart};
use crate::app::context::use_api;
use crate::format;
use crate::platform::timer::{run_every, sleep};
use crate::views::dashboard::{
    default_selection, fetch_selection, fetch_snapshot, DashboardSnapshot, REFRESH_INTERVAL,
};

fn sensor_icon(kind: &SensorType) -> &'static str {
    match kind {
        SensorType::Temperature => "🌡️",
        SensorType::Humidity => "💧",
        SensorType::SoilMoisture => "🌱",
        SensorType::Light => "☀️",
        SensorType::Other(_) => "📟",
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let client = use_api();

    let mut snapshot = use_signal(|| None::<DashboardSnapshot>);
    let mut selected = use_signal(|| None::<i64>);

    // Periodic refresh; dropped with the component
    let refresh_client = client.clone();
    use_future(move || {
        let client = refresh_client.clone();
        async move {
            run_every(REFRESH_INTERVAL, sleep, move || {
                let client = client.clone();
                async move {
                    match fetch_snapshot(&client).await {
                        Ok(next) => {
                            let selection = default_selection(*selected.peek(), &next.sensors);
                            if selection != *selected.peek() {
                                selected.set(selection);
                            }
                            snapshot.set(Some(next));
                        }
                        Err(e) => {
                            tracing::warn!("Error fetching dashboard data: {}", e);
                            if snapshot.peek().is_none() {
                                snapshot.set(Some(DashboardSnapshot::default()));
                            }
                        }
                    }
                }
            })
            .await
        }
    });

    // History and stats follow the selection
    let detail = use_resource(move || {
        let client = client.clone();
        let sensor_id = selected();
        async move {
            let sensor_id = sensor_id?;
            match fetch_selection(&client, sensor_id).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    tracing::warn!(sensor_id, "Error fetching sensor history: {}", e);
                    None
                }
            }
        }
    });

    let Some(current) = snapshot() else {
        return rsx! {
            Layout {
                title: "Dashboard".to_string(),
                nav_active: "dashboard".to_string(),
                div { aria_busy: "true", "Loading dashboard..." }
            }
        };
    };

    let selected_sensor = selected().and_then(|id| current.sensors.iter().find(|s| s.id == id).cloned());
    let detail = detail.read().clone().flatten().unwrap_or_default();
    let history_len = detail.history.len();
    let stats_line = detail.stats.map(|s| {
        (
            format!("Min: {:.1}", s.min),
            format!("Avg: {:.1}", s.avg),
            format!("Max: {:.1}", s.max),
            format!("{} readings in 24h", s.count),
        )
    });

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            h1 { "Dashboard" }

            SummaryTiles { summary: current.summary }

            section { id: "sensors",
                h2 { "Sensors" }
                if current.sensors.is_empty() {
                    article { class: "empty", "No active sensors" }
                } else {
                    div { class: "sensor-grid",
                        for sensor in current.sensors.iter() {
                            SensorCard {
                                key: "{sensor.id}",
                                selected: selected() == Some(sensor.id),
                                sensor: sensor.clone(),
                                on_select: move |id| selected.set(Some(id)),
                            }
                        }
                    }
                }
            }

            if let Some(sensor) = selected_sensor {
                section { id: "history",
                    article {
                        header {
                            strong { "{sensor.name}" }
                            " "
                            small { "last {history_len} readings" }
                        }
                        LineChart {
                            points: detail.history.clone(),
                            unit: sensor.latest_data.as_ref().map(|r| r.unit.clone()).unwrap_or_default(),
                        }
                        footer {
                            if let Some((min, avg, max, count)) = stats_line {
                                div { class: "stats",
                                    span { "{min}" }
                                    span { "{avg}" }
                                    span { "{max}" }
                                    small { "{count}" }
                                }
                            } else {
                                small { "No statistics for the last 24 hours" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryTiles(summary: AlertsSummary) -> Element {
    rsx! {
        div { class: "tiles",
            article { class: "tile", small { "Total alerts" } strong { "{summary.total}" } }
            article { class: "tile", small { "Unresolved" } strong { "{summary.unresolved}" } }
            article { class: "tile critical", small { "Critical" } strong { "{summary.critical}" } }
            article { class: "tile resolved", small { "Resolved" } strong { "{summary.resolved}" } }
        }
    }
}

#[component]
fn SensorCard(sensor: Sensor, selected: bool, on_select: EventHandler<i64>) -> Element {
    let id = sensor.id;
    let icon = sensor_icon(&sensor.kind);
    let kind = sensor.kind.label().to_string();
    let (status_class, status) = format::status_badge(&sensor.status);
    let location = sensor.location.clone().unwrap_or_else(|| "—".to_string());
    let (value, taken_at) = match &sensor.latest_data {
        Some(r) => (format::reading(r.value, &r.unit), format::date_time(&r.timestamp)),
        None => ("—".to_string(), "No data".to_string()),
    };

    rsx! {
        article {
            class: if selected { "selected" } else { "" },
            onclick: move |_| on_select.call(id),
            header {
                "{icon} "
                strong { "{sensor.name}" }
                " "
                span { class: "{status_class}", "{status}" }
            }
            p { class: "status-ok", strong { "{value}" } }
            small { "{kind} · {location}" }
            br {}
            small { "{taken_at}" }
        }
    }
}
