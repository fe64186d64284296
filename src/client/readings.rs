//! `/sensor-data`

use agri_types::reading::{ReadingCreated, ReadingList};
use agri_types::sensor::SensorList;
use agri_types::{NewReading, Reading, Sensor, StatsResponse};

use super::{ApiClient, Query};
use crate::error::ApiError;

/// Optional filters for `GET /sensor-data`. Results come back newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingQuery {
    /// Database id of the sensor
    pub sensor_id: Option<i64>,
    pub limit: Option<u32>,
    /// ISO-8601 lower bound
    pub start_date: Option<String>,
    /// ISO-8601 upper bound
    pub end_date: Option<String>,
}

impl ReadingQuery {
    /// The `limit` most recent readings of one sensor
    pub fn recent(sensor_id: i64, limit: u32) -> Self {
        Self {
            sensor_id: Some(sensor_id),
            limit: Some(limit),
            ..Default::default()
        }
    }

    fn pairs(&self) -> Query {
        let mut query = Query::new();
        if let Some(id) = self.sensor_id {
            query.push(("sensor_id", id.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(start) = &self.start_date {
            query.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            query.push(("end_date", end.clone()));
        }
        query
    }
}

pub struct ReadingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReadingsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /sensor-data
    pub async fn list(&self, query: &ReadingQuery) -> Result<Vec<Reading>, ApiError> {
        let list: ReadingList = self.client.get_json("/sensor-data", &query.pairs()).await?;
        Ok(list.data)
    }

    /// GET /sensor-data/latest: active sensors, each with its newest reading
    pub async fn latest(&self) -> Result<Vec<Sensor>, ApiError> {
        let list: SensorList = self.client.get_json("/sensor-data/latest", &[]).await?;
        Ok(list.sensors)
    }

    /// POST /sensor-data
    pub async fn create(&self, reading: &NewReading) -> Result<Reading, ApiError> {
        let created: ReadingCreated = self.client.post_json("/sensor-data", reading).await?;
        Ok(created.data)
    }

    /// GET /sensor-data/stats/{id}
    pub async fn stats(&self, sensor_id: i64) -> Result<StatsResponse, ApiError> {
        self.client
            .get_json(&format!("/sensor-data/stats/{}", sensor_id), &[])
            .await
    }
}
