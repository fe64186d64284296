//! Login and registration form state.

use agri_types::{Credentials, RegisterRequest, Role};

const MISSING_FIELDS: &str = "Please fill in all fields";

fn missing(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, String> {
        if missing(&[&self.username, &self.password]) {
            return Err(MISSING_FIELDS.to_string());
        }
        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration fields. Role defaults to technician.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        if missing(&[&self.username, &self.email, &self.password]) {
            return Err(MISSING_FIELDS.to_string());
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm {
            username: "admin".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(MISSING_FIELDS.to_string()));

        form.password = "admin123".to_string();
        let creds = form.validate().unwrap();
        assert_eq!(creds.username, "admin");
    }

    #[test]
    fn test_login_password_not_trimmed() {
        let form = LoginForm {
            username: " admin ".to_string(),
            password: " pass ".to_string(),
        };
        let creds = form.validate().unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, " pass ");
    }

    #[test]
    fn test_register_defaults_to_technician() {
        let form = RegisterForm {
            username: "bob".to_string(),
            email: "bob@farm.test".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().role, Role::Technician);
    }

    #[test]
    fn test_register_requires_email() {
        let form = RegisterForm {
            username: "bob".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }
}
