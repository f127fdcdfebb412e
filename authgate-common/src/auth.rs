//! Authentication payloads exchanged with the auth service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request body for `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Registration request body for `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw values of the login panel inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Login never asks the service for a long-lived session.
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            remember: false,
        }
    }
}

/// Raw values of the registration panel inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Username and email are trimmed, passwords are sent as typed.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// Response envelope returned by every auth endpoint
///
/// Only `success`, `message` and `data.token` drive the page. A missing
/// `success` reads as a failure; `code` and `data.user` are kept opaque so an
/// unexpected shape there never costs the token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AuthData>,
}

impl AuthResponse {
    /// Token issued by the service, if any. Empty tokens count as missing.
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.token.as_deref())
            .filter(|token| !token.is_empty())
    }

    /// Server supplied message, if any. Empty messages count as missing.
    pub fn server_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Payload of a successful login or registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Account details echoed back by the service, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}
