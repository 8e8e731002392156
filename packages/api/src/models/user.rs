//! # User-facing auth payloads
//!
//! Request and response bodies for the authentication and registration
//! endpoints:
//!
//! - [`LoginRequest`] / [`LoginResponse`] for `POST /auth/login`.
//! - [`NewUser`] for `POST /users/`.
//! - [`ProtectedResponse`] for `GET /auth/protected`, with
//!   [`ProtectedResponse::user_id`] digging the caller's id out of whichever
//!   shape the server used.
//! - [`UserInfo`], the user projection embedded in those responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User information as the API exposes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// "First Last", falling back to the email, then the id.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            full
        } else {
            self.email.clone().unwrap_or_else(|| self.id.clone())
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Registration form body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProtectedResponse {
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl ProtectedResponse {
    /// The authenticated user's id.
    ///
    /// Checked in order: a top-level `user_id`, the embedded `user.id`, then a
    /// `message` array containing a line like `"ID: <id>"`.
    pub fn user_id(&self) -> Option<String> {
        if let Some(id) = self.user_id.as_ref().filter(|id| !id.is_empty()) {
            return Some(id.clone());
        }
        if let Some(user) = &self.user {
            return Some(user.id.clone());
        }
        self.message
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .find_map(|line| line.strip_prefix("ID:"))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response() {
        let body: LoginResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "access_token": "a.b.c",
            "refresh_token": "d.e.f",
            "user": { "id": "u1", "first_name": "Ana", "email": "ana@example.com" }
        }))
        .unwrap();
        assert_eq!(body.access_token.as_deref(), Some("a.b.c"));
        assert_eq!(body.user.unwrap().display_name(), "Ana");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let user = UserInfo {
            id: "u1".to_string(),
            first_name: None,
            last_name: None,
            email: Some("ana@example.com".to_string()),
            is_admin: false,
        };
        assert_eq!(user.display_name(), "ana@example.com");

        let anonymous = UserInfo { email: None, ..user };
        assert_eq!(anonymous.display_name(), "u1");
    }

    #[test]
    fn test_user_id_sources() {
        let direct: ProtectedResponse =
            serde_json::from_value(json!({ "message": "Hello Ana!", "user_id": "u1" })).unwrap();
        assert_eq!(direct.user_id().as_deref(), Some("u1"));

        let embedded: ProtectedResponse =
            serde_json::from_value(json!({ "user": { "id": "u2" } })).unwrap();
        assert_eq!(embedded.user_id().as_deref(), Some("u2"));

        let lines: ProtectedResponse = serde_json::from_value(json!({
            "message": ["Hello, user:", "Name: Ana", "ID: u3"]
        }))
        .unwrap();
        assert_eq!(lines.user_id().as_deref(), Some("u3"));

        let none: ProtectedResponse =
            serde_json::from_value(json!({ "message": "Hello" })).unwrap();
        assert_eq!(none.user_id(), None);
    }

    #[test]
    fn test_new_user_body() {
        let user = NewUser {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "first_name": "Ana",
                "last_name": "Lopez",
                "email": "ana@example.com",
                "password": "secret"
            })
        );
    }
}
