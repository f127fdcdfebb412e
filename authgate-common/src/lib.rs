//! Common types and decision logic shared by the AuthGate front end
//!
//! Everything here is target independent: the browser crate supplies the
//! HTTP transport and the DOM, this crate decides what a submission means.

pub mod auth;
pub mod callback;
pub mod config;
pub mod error;
pub mod flow;
pub mod messages;
pub mod query;
pub mod validation;

pub use auth::{AuthData, AuthResponse, LoginForm, LoginRequest, RegisterForm, RegisterRequest};
pub use config::PortalConfig;
pub use error::{Action, AuthError, ValidationError};
pub use flow::{submit_login, submit_register, AuthService, Notice, Outcome};
pub use messages::{Locale, Messages};

/// Query parameter carrying the post-login redirect target
pub const CALLBACK_PARAM: &str = "callbackUrl";

/// Query parameter appended to the redirect target
pub const TOKEN_PARAM: &str = "token";
