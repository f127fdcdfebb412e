//! Failure taxonomy for a single submission attempt
//!
//! Every variant is terminal for the attempt and maps to exactly one inline
//! notice; nothing here is meant to reach a global handler.

use thiserror::Error;

use crate::messages::Messages;
use crate::query::QueryError;

/// Local validation failure, detected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("one or more required fields are empty")]
    MissingFields,

    #[error("password and confirmation differ")]
    PasswordMismatch,

    #[error("password shorter than {min} characters")]
    PasswordTooShort { min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered `success: false`
    #[error("rejected by auth service: {}", .0.as_deref().unwrap_or("<no message>"))]
    Rejected(Option<String>),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    /// The page's own address carries an undecodable `callbackUrl`
    #[error("unreadable page query: {0}")]
    Query(#[from] QueryError),

    #[error("invalid callback URL: {0}")]
    InvalidCallback(String),
}

/// Which submission an error belongs to; selects the default wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
}

impl AuthError {
    /// Text shown in the panel for this error.
    pub fn user_message(&self, action: Action, messages: &Messages) -> String {
        match self {
            AuthError::Validation(ValidationError::MissingFields) => messages.fill_all_fields.to_string(),
            AuthError::Validation(ValidationError::PasswordMismatch) => messages.password_mismatch.to_string(),
            AuthError::Validation(ValidationError::PasswordTooShort { min }) => {
                messages.password_too_short.replace("{min}", &min.to_string())
            }
            AuthError::Rejected(Some(msg)) if !msg.is_empty() => msg.clone(),
            AuthError::Rejected(_) => match action {
                Action::Login => messages.login_rejected.to_string(),
                Action::Register => messages.register_failed.to_string(),
            },
            AuthError::Transport(_) | AuthError::Decode(_) | AuthError::Query(_) => match action {
                Action::Login => messages.login_failed.to_string(),
                Action::Register => messages.register_failed.to_string(),
            },
            AuthError::InvalidCallback(_) => messages.invalid_callback.to_string(),
        }
    }
}
