//! Dashboard data: latest readings, alert summary and the selected sensor's
//! recent history.

use std::time::Duration;

use agri_types::{AlertsSummary, Reading, Sensor, SensorStats};

use crate::client::{ApiClient, ReadingQuery};
use crate::error::ApiError;
use crate::format;

/// How often the dashboard refetches while mounted
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Readings shown in the history chart
pub const HISTORY_LIMIT: u32 = 50;

/// Everything the dashboard shows above the chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// Active sensors, each with its latest reading
    pub sensors: Vec<Sensor>,
    pub summary: AlertsSummary,
}

/// Fetch latest readings and the alert summary concurrently. Either failure
/// fails the whole snapshot so stale state is never half-replaced.
pub async fn fetch_snapshot(client: &ApiClient) -> Result<DashboardSnapshot, ApiError> {
    let readings = client.sensor_data();
    let alerts = client.alerts();
    let (sensors, summary) = futures::try_join!(readings.latest(), alerts.summary())?;
    Ok(DashboardSnapshot { sensors, summary })
}

/// Chart subject after a refresh: the current selection while that sensor
/// is still listed, otherwise the first sensor.
pub fn default_selection(current: Option<i64>, sensors: &[Sensor]) -> Option<i64> {
    match current {
        Some(id) if sensors.iter().any(|s| s.id == id) => Some(id),
        _ => sensors.first().map(|s| s.id),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// `HH:MM` axis label
    pub label: String,
    pub value: f64,
    pub timestamp: String,
}

/// Oldest-first chart points from a newest-first reading list. Readings
/// without a value are skipped.
pub fn chart_points(readings: Vec<Reading>) -> Vec<ChartPoint> {
    readings
        .into_iter()
        .rev()
        .filter_map(|r| {
            r.value.map(|value| ChartPoint {
                label: format::time_of_day(&r.timestamp),
                value,
                timestamp: r.timestamp,
            })
        })
        .collect()
}

pub async fn fetch_history(client: &ApiClient, sensor_id: i64) -> Result<Vec<ChartPoint>, ApiError> {
    let readings = client
        .sensor_data()
        .list(&ReadingQuery::recent(sensor_id, HISTORY_LIMIT))
        .await?;
    Ok(chart_points(readings))
}

/// Chart and statistics for the selected sensor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionDetail {
    pub history: Vec<ChartPoint>,
    /// Last 24 hours; `None` when the sensor has no data or stats failed
    pub stats: Option<SensorStats>,
}

/// History is required; statistics are best effort.
pub async fn fetch_selection(client: &ApiClient, sensor_id: i64) -> Result<SelectionDetail, ApiError> {
    let readings = client.sensor_data();
    let (history, stats) = futures::join!(fetch_history(client, sensor_id), readings.stats(sensor_id));

    let stats = match stats {
        Ok(resp) => resp.stats,
        Err(e) => {
            tracing::warn!(sensor_id, "Error fetching sensor stats: {}", e);
            None
        }
    };
    Ok(SelectionDetail {
        history: history?,
        stats,
    })
}
