//! Login and registration submission flows
//!
//! A submission runs start to finish as one awaited sequence and folds every
//! result into an [`Outcome`]. The transport sits behind [`AuthService`] so
//! the browser crate can plug in its HTTP client.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::auth::{AuthResponse, LoginForm, LoginRequest, RegisterForm, RegisterRequest};
use crate::callback::callback_with_token;
use crate::config::PortalConfig;
use crate::error::{Action, AuthError};
use crate::query::get_url_parameter;
use crate::validation::validate_registration;
use crate::CALLBACK_PARAM;

/// Transport to the authentication service.
///
/// Implementations return the decoded envelope whatever its `success` flag;
/// only transport and decoding problems are errors here.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;
}

/// Inline message rendered into a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    /// CSS class paired with `message` on the rendered element
    pub fn class(&self) -> &'static str {
        if self.is_error {
            "error-message"
        } else {
            "success-message"
        }
    }
}

/// What the page should do once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Leave the page for this absolute URL
    Redirect(String),
    /// Show a message in the submitting panel
    Notice(Notice),
    /// Show the notice, then after the configured delay switch to the login
    /// panel with `username` filled in and the password cleared
    SwitchToLogin { notice: Notice, username: String },
}

pub async fn submit_login<S>(service: &S, form: &LoginForm, page_href: &str, config: &PortalConfig) -> Outcome
where
    S: AuthService + ?Sized,
{
    let messages = config.messages();
    let request = form.to_request();
    debug!(username = %request.username, "submitting login");

    let response = match service.login(&request).await.and_then(accepted) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "login failed");
            return Outcome::Notice(Notice::error(e.user_message(Action::Login, &messages)));
        }
    };

    match redirect_target(&response, page_href) {
        Ok(Some(url)) => Outcome::Redirect(url),
        Ok(None) => Outcome::Notice(Notice::success(messages.login_success)),
        Err(e) => {
            warn!(error = %e, "login succeeded but redirect aborted");
            Outcome::Notice(Notice::error(e.user_message(Action::Login, &messages)))
        }
    }
}

pub async fn submit_register<S>(service: &S, form: &RegisterForm, page_href: &str, config: &PortalConfig) -> Outcome
where
    S: AuthService + ?Sized,
{
    let messages = config.messages();

    if let Err(e) = validate_registration(form, config.min_password_len) {
        debug!(reason = %e, "registration rejected locally");
        return Outcome::Notice(Notice::error(AuthError::from(e).user_message(Action::Register, &messages)));
    }

    let request = form.to_request();
    debug!(username = %request.username, "submitting registration");

    let response = match service.register(&request).await.and_then(accepted) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "registration failed");
            return Outcome::Notice(Notice::error(e.user_message(Action::Register, &messages)));
        }
    };

    match redirect_target(&response, page_href) {
        Ok(Some(url)) => Outcome::Redirect(url),
        Ok(None) => Outcome::SwitchToLogin {
            notice: Notice::success(response.server_message().unwrap_or(messages.register_success)),
            username: request.username,
        },
        Err(e) => {
            warn!(error = %e, "registration succeeded but redirect aborted");
            Outcome::Notice(Notice::error(e.user_message(Action::Register, &messages)))
        }
    }
}

fn accepted(response: AuthResponse) -> Result<AuthResponse, AuthError> {
    if response.success {
        Ok(response)
    } else {
        Err(AuthError::Rejected(response.server_message().map(str::to_string)))
    }
}

/// Redirect only when both a non-empty `callbackUrl` and a token are present.
/// An undecodable `callbackUrl` fails the attempt even without a token.
fn redirect_target(response: &AuthResponse, page_href: &str) -> Result<Option<String>, AuthError> {
    let callback = get_url_parameter(page_href, CALLBACK_PARAM)?.filter(|c| !c.is_empty());
    let (callback, token) = match (callback, response.token()) {
        (Some(callback), Some(token)) => (callback, token),
        _ => return Ok(None),
    };

    let url = callback_with_token(&callback, token)?;
    debug!(host = url.host_str().unwrap_or(""), "redirecting to callback");
    Ok(Some(url.into()))
}
