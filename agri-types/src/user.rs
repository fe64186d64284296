//! Users, roles and the login/registration exchange.

use serde::{Deserialize, Serialize};

/// Operator role. Only admins may list or delete other users.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Technician,
}

impl Role {
    /// Human-readable label shown next to the username in the navbar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Technician => "Technician",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Technician => write!(f, "technician"),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            _ => Self::Technician,
        }
    }
}

/// An authenticated operator as returned by the auth and users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/registration: a bearer token plus the user it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Body of `PUT /users/{id}`. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// `GET /users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /auth/me`, `GET /users/{id}`, `PUT /users/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("ADMIN"), Role::Admin);
        assert_eq!(Role::from("technician"), Role::Technician);
    }

    #[test]
    fn test_auth_response_decodes_backend_shape() {
        let json = r#"{
            "access_token": "abc.def.ghi",
            "user": {"id": 1, "username": "admin", "email": "admin@farm.io", "role": "admin"}
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc.def.ghi");
        assert_eq!(resp.user.role, Role::Admin);
        assert_eq!(resp.user.role.label(), "Administrator");
    }

    #[test]
    fn test_user_update_omits_unset_fields() {
        let update = UserUpdate {
            email: Some("new@farm.io".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"email": "new@farm.io"}));
    }
}
