//! `/sensors`

use agri_types::sensor::{SensorEnvelope, SensorList, SensorMutation};
use agri_types::{MessageResponse, Sensor, SensorPayload, SensorStatus, SensorType};

use super::{ApiClient, Query};
use crate::error::ApiError;

/// Optional filters for `GET /sensors`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorQuery {
    pub status: Option<SensorStatus>,
    pub kind: Option<SensorType>,
}

impl SensorQuery {
    fn pairs(&self) -> Query {
        let mut query = Query::new();
        if let Some(status) = &self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(kind) = &self.kind {
            query.push(("type", kind.to_string()));
        }
        query
    }
}

pub struct SensorsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SensorsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /sensors
    pub async fn list(&self, query: &SensorQuery) -> Result<Vec<Sensor>, ApiError> {
        let list: SensorList = self.client.get_json("/sensors", &query.pairs()).await?;
        Ok(list.sensors)
    }

    /// GET /sensors/{id}
    pub async fn get(&self, id: i64) -> Result<Sensor, ApiError> {
        let envelope: SensorEnvelope = self
            .client
            .get_json(&format!("/sensors/{}", id), &[])
            .await?;
        Ok(envelope.sensor)
    }

    /// POST /sensors
    pub async fn create(&self, payload: &SensorPayload) -> Result<Sensor, ApiError> {
        let created: SensorMutation = self.client.post_json("/sensors", payload).await?;
        Ok(created.sensor)
    }

    /// PUT /sensors/{id}
    pub async fn update(&self, id: i64, payload: &SensorPayload) -> Result<Sensor, ApiError> {
        let updated: SensorMutation = self
            .client
            .put_json(&format!("/sensors/{}", id), Some(payload))
            .await?;
        Ok(updated.sensor)
    }

    /// DELETE /sensors/{id}
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .client
            .delete_json(&format!("/sensors/{}", id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::{sensor_json, TestBackend};

    #[tokio::test]
    async fn test_list_with_filters() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Get,
            "/sensors",
            200,
            &format!(r#"{{"sensors": [{}], "total": 1}}"#, sensor_json(1, "H1", "Hum", "humidity")),
        );

        let query = SensorQuery {
            status: Some(SensorStatus::Maintenance),
            kind: Some(SensorType::Humidity),
        };
        let sensors = backend.client.sensors().list(&query).await.unwrap();

        assert_eq!(sensors.len(), 1);
        assert_eq!(
            backend.calls(),
            vec!["GET /sensors?status=maintenance&type=humidity".to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_puts_payload_to_id() {
        let backend = TestBackend::new();
        backend.respond(
            Method::Put,
            "/sensors/3",
            200,
            &format!(r#"{{"message": "ok", "sensor": {}}}"#, sensor_json(3, "T3", "Renamed", "temperature")),
        );

        let payload = SensorPayload {
            sensor_id: "T3".to_string(),
            name: "Renamed".to_string(),
            ..Default::default()
        };
        let sensor = backend.client.sensors().update(3, &payload).await.unwrap();

        assert_eq!(sensor.name, "Renamed");
        assert_eq!(backend.last_request().method, Method::Put);
    }

    #[tokio::test]
    async fn test_delete_surfaces_server_error() {
        let backend = TestBackend::new();
        backend.respond(Method::Delete, "/sensors/8", 500, r#"{"error": "constraint violation"}"#);

        let err = backend.client.sensors().delete(8).await.unwrap_err();
        assert_eq!(err.server_message(), Some("constraint violation"));
    }
}
