//! Sensor management: the create/edit form and list reloads after writes.

use agri_types::{Sensor, SensorPayload, SensorStatus, SensorType};

use crate::client::{ApiClient, SensorQuery};
use crate::error::ApiError;

pub const SAVE_FALLBACK: &str = "Error saving sensor";
pub const DELETE_FALLBACK: &str = "Error deleting sensor";

/// Editable fields of the sensor modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorForm {
    pub sensor_id: String,
    pub name: String,
    pub kind: SensorType,
    pub location: String,
    pub status: SensorStatus,
    pub description: String,
}

impl SensorForm {
    pub fn from_sensor(sensor: &Sensor) -> Self {
        Self {
            sensor_id: sensor.sensor_id.clone(),
            name: sensor.name.clone(),
            kind: sensor.kind.clone(),
            location: sensor.location.clone().unwrap_or_default(),
            status: sensor.status.clone(),
            description: sensor.description.clone().unwrap_or_default(),
        }
    }

    /// Required fields only; everything else is the backend's call
    pub fn validate(&self) -> Result<(), String> {
        if self.sensor_id.trim().is_empty() || self.name.trim().is_empty() {
            return Err("Sensor ID and name are required".to_string());
        }
        Ok(())
    }

    fn payload(&self) -> SensorPayload {
        let optional = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        SensorPayload {
            sensor_id: self.sensor_id.trim().to_string(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            location: optional(&self.location),
            status: self.status.clone(),
            description: optional(&self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    /// Editing the sensor with database id `id`. `sensor_id` is the value it
    /// was created with and is what gets sent back.
    Edit { id: i64, sensor_id: String },
}

/// State of the open sensor modal
#[derive(Debug, Clone, PartialEq)]
pub struct SensorEditor {
    mode: FormMode,
    pub form: SensorForm,
}

impl SensorEditor {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            form: SensorForm::default(),
        }
    }

    pub fn edit(sensor: &Sensor) -> Self {
        Self {
            mode: FormMode::Edit {
                id: sensor.id,
                sensor_id: sensor.sensor_id.clone(),
            },
            form: SensorForm::from_sensor(sensor),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// The external key cannot change after creation
    pub fn sensor_id_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New sensor",
            FormMode::Edit { .. } => "Edit sensor",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Edit { .. } => "Save",
        }
    }

    /// Request body. On edit the original `sensor_id` always wins over
    /// whatever the form holds.
    pub fn payload(&self) -> SensorPayload {
        let mut payload = self.form.payload();
        if let FormMode::Edit { sensor_id, .. } = &self.mode {
            payload.sensor_id = sensor_id.clone();
        }
        payload
    }
}

pub async fn load(client: &ApiClient) -> Result<Vec<Sensor>, ApiError> {
    client.sensors().list(&SensorQuery::default()).await
}

/// After a successful write the list is refetched. A failed refetch is a
/// read failure: logged, and reported as `None` so the page keeps its list.
async fn reload(client: &ApiClient) -> Option<Vec<Sensor>> {
    match load(client).await {
        Ok(sensors) => Some(sensors),
        Err(e) => {
            tracing::warn!("Error fetching sensors: {}", e);
            None
        }
    }
}

/// Create or update, then refetch the list
pub async fn save(client: &ApiClient, editor: &SensorEditor) -> Result<Option<Vec<Sensor>>, ApiError> {
    let payload = editor.payload();
    let api = client.sensors();
    let sensor = match editor.mode() {
        FormMode::Create => api.create(&payload).await?,
        FormMode::Edit { id, .. } => api.update(*id, &payload).await?,
    };
    tracing::info!(sensor_id = %sensor.sensor_id, "Sensor saved");
    Ok(reload(client).await)
}

pub async fn delete_and_reload(client: &ApiClient, id: i64) -> Result<Option<Vec<Sensor>>, ApiError> {
    client.sensors().delete(id).await?;
    tracing::info!(id, "Sensor deleted");
    Ok(reload(client).await)
}

pub fn delete_confirmation(sensor: &Sensor) -> String {
    format!("Delete sensor \"{}\" ({})?", sensor.name, sensor.sensor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::{sensor_json, TestBackend};

    fn list_body(sensors: &[String]) -> String {
        format!(r#"{{"sensors": [{}], "total": {}}}"#, sensors.join(","), sensors.len())
    }

    fn sensor(id: i64, sensor_id: &str, name: &str) -> Sensor {
        serde_json::from_str(&sensor_json(id, sensor_id, name, "temperature")).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_refresh() {
        let backend = TestBackend::new();
        let created = sensor_json(1, "S1", "Soil A", "soil_moisture");
        backend.respond(
            Method::Post,
            "/sensors",
            201,
            &format!(r#"{{"message": "Sensor created", "sensor": {}}}"#, created),
        );
        backend.respond(Method::Get, "/sensors", 200, &list_body(&[created.clone()]));

        let mut editor = SensorEditor::create();
        editor.form.sensor_id = "S1".to_string();
        editor.form.name = "Soil A".to_string();
        editor.form.kind = SensorType::SoilMoisture;
        editor.form.status = SensorStatus::Active;

        let sensors = save(&backend.client, &editor).await.unwrap().unwrap();

        assert_eq!(sensors.len(), 1);
        assert_eq!(
            backend.calls(),
            vec!["POST /sensors".to_string(), "GET /sensors".to_string()]
        );

        let posts: Vec<_> = backend
            .requests()
            .into_iter()
            .filter(|r| r.method == Method::Post)
            .collect();
        assert_eq!(posts.len(), 1);
        let body: serde_json::Value = serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "sensor_id": "S1",
                "name": "Soil A",
                "type": "soil_moisture",
                "location": null,
                "status": "active",
                "description": null
            })
        );
    }

    #[test]
    fn test_edit_locks_and_preserves_sensor_id() {
        let mut editor = SensorEditor::edit(&sensor(4, "T-04", "Greenhouse"));
        assert!(editor.sensor_id_locked());
        assert_eq!(editor.form.location, "Field 1");

        editor.form.sensor_id = "HACKED".to_string();
        editor.form.name = "Greenhouse north".to_string();

        let payload = editor.payload();
        assert_eq!(payload.sensor_id, "T-04");
        assert_eq!(payload.name, "Greenhouse north");
    }

    #[tokio::test]
    async fn test_update_targets_database_id() {
        let backend = TestBackend::new();
        let updated = sensor_json(4, "T-04", "Greenhouse north", "temperature");
        backend.respond(
            Method::Put,
            "/sensors/4",
            200,
            &format!(r#"{{"message": "Sensor updated", "sensor": {}}}"#, updated),
        );
        backend.respond(Method::Get, "/sensors", 200, &list_body(&[updated]));

        let mut editor = SensorEditor::edit(&sensor(4, "T-04", "Greenhouse"));
        editor.form.name = "Greenhouse north".to_string();
        save(&backend.client, &editor).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec!["PUT /sensors/4".to_string(), "GET /sensors".to_string()]
        );
        let body: serde_json::Value =
            serde_json::from_str(backend.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["sensor_id"], "T-04");
    }

    #[tokio::test]
    async fn test_edit_sends_unlisted_type_and_status_back_unchanged() {
        let raw = r#"{"id": 7, "sensor_id": "C-01", "name": "Barn", "type": "co2",
                      "location": null, "status": "offline", "description": null}"#;
        let original: Sensor = serde_json::from_str(raw).unwrap();
        let backend = TestBackend::new();
        backend.respond(
            Method::Put,
            "/sensors/7",
            200,
            &format!(r#"{{"message": "Sensor updated", "sensor": {}}}"#, raw),
        );
        backend.respond(Method::Get, "/sensors", 200, &list_body(&[raw.to_string()]));

        let mut editor = SensorEditor::edit(&original);
        editor.form.name = "Barn west".to_string();
        save(&backend.client, &editor).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(backend.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["type"], "co2");
        assert_eq!(body["status"], "offline");
        assert_eq!(body["name"], "Barn west");
    }

    #[tokio::test]
    async fn test_save_error_skips_reload() {
        let backend = TestBackend::new();
        backend.respond(Method::Post, "/sensors", 400, r#"{"error": "Sensor ID already exists"}"#);

        let mut editor = SensorEditor::create();
        editor.form.sensor_id = "S1".to_string();
        editor.form.name = "Dup".to_string();

        let err = save(&backend.client, &editor).await.unwrap_err();
        assert_eq!(err.user_message(SAVE_FALLBACK), "Sensor ID already exists");
        assert_eq!(backend.calls(), vec!["POST /sensors".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_reload_is_not_a_save_error() {
        let backend = TestBackend::new();
        backend.respond(Method::Delete, "/sensors/2", 200, r#"{"message": "Sensor deleted"}"#);

        let outcome = delete_and_reload(&backend.client, 2).await.unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_validate_requires_id_and_name() {
        let mut form = SensorForm::default();
        assert!(form.validate().is_err());
        form.sensor_id = "S1".to_string();
        form.name = "  ".to_string();
        assert!(form.validate().is_err());
        form.name = "Soil".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_delete_confirmation() {
        assert_eq!(
            delete_confirmation(&sensor(1, "S1", "Soil A")),
            "Delete sensor \"Soil A\" (S1)?"
        );
    }
}
