//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Username and password for a sign-in. Never persisted.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Account creation form
#[derive(Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub password2: String,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password2: confirmation.into(),
        }
    }

    /// Checks that must pass before the form is sent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField("username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        if self.password != self.password2 {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Body of a successful `POST /api/token/`
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access: String,

    #[serde(default)]
    pub refresh: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("has_refresh", &self.refresh.is_some())
            .finish_non_exhaustive()
    }
}

/// Body of a successful `POST /user/reg/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /user/profile/`
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub is_staff: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_password_mismatch() {
        let form = Registration::new("reader", "x", "y");
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_registration_requires_username_and_password() {
        assert_eq!(
            Registration::new("  ", "x", "x").validate(),
            Err(ValidationError::MissingField("username"))
        );
        assert_eq!(
            Registration::new("reader", "", "").validate(),
            Err(ValidationError::MissingField("password"))
        );
        assert!(Registration::new("reader", "pw", "pw").validate().is_ok());
    }

    #[test]
    fn test_registration_wire_shape() {
        let json = serde_json::to_value(Registration::new("a", "b", "b")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "a", "password": "b", "password2": "b"})
        );
    }

    #[test]
    fn test_debug_never_shows_password() {
        let creds = Credentials::new("a", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));

        let form = Registration::new("a", "hunter2", "hunter2");
        assert!(!format!("{:?}", form).contains("hunter2"));
    }

    #[test]
    fn test_token_response_requires_access() {
        let ok: TokenResponse = serde_json::from_str(r#"{"access":"tok123"}"#).unwrap();
        assert_eq!(ok.access, "tok123");
        assert!(ok.refresh.is_none());

        assert!(serde_json::from_str::<TokenResponse>(r#"{"detail":"nope"}"#).is_err());
    }

    #[test]
    fn test_profile_parses_extra_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"user":{"id":3,"username":"ed","password":"hash","groups":[1],"is_staff":true}}"#,
        )
        .unwrap();
        assert_eq!(profile.user.username, "ed");
        assert!(profile.user.is_staff);
        assert!(profile.user.email.is_none());
    }
}
