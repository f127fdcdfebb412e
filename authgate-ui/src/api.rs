//! HTTP client for the authentication service

use async_trait::async_trait;
use authgate_common::{AuthError, AuthResponse, AuthService, LoginRequest, PortalConfig, RegisterRequest};
use serde::Serialize;

/// `AuthService` backed by the browser's fetch API
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    login_url: String,
    register_url: String,
}

impl HttpAuthService {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            login_url: config.login_url(),
            register_url: config.register_url(),
        }
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        post_json(&self.login_url, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        post_json(&self.register_url, request).await
    }
}

/// POST a JSON body and decode the response envelope
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<AuthResponse, AuthError> {
    let payload = serde_json::to_string(body).map_err(|e| AuthError::Transport(e.to_string()))?;

    let response = reqwasm::http::Request::post(url)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    decode_envelope(status, &text)
}

/// Interpret a response body.
///
/// The service reports failures as a JSON envelope with a 4xx/5xx status, so
/// the body is tried first whatever the status. A body that does not decode
/// is a transport error for non-2xx statuses and a decode error otherwise.
pub fn decode_envelope(status: u16, body: &str) -> Result<AuthResponse, AuthError> {
    match serde_json::from_str::<AuthResponse>(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&status) => Err(AuthError::Decode(e.to_string())),
        Err(_) => Err(AuthError::Transport(format!("HTTP {}", status))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_config() {
        let config = PortalConfig {
            api_base: "https://sso.example.com/api".to_string(),
            ..PortalConfig::default()
        };
        let service = HttpAuthService::new(&config);
        assert_eq!(service.login_url, "https://sso.example.com/api/auth/login");
        assert_eq!(service.register_url, "https://sso.example.com/api/auth/register");
    }

    #[test]
    fn test_decode_success_envelope() {
        let envelope = decode_envelope(200, r#"{"code":0,"success":true,"message":"success","data":{"token":"t"}}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.token(), Some("t"));
    }

    #[test]
    fn test_decode_error_status_with_envelope() {
        let envelope = decode_envelope(400, r#"{"code":-1,"success":false,"message":"Passwords do not match","data":null}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.server_message(), Some("Passwords do not match"));
    }

    #[test]
    fn test_decode_bare_message_envelope() {
        let envelope = decode_envelope(401, r#"{"message":"Unauthorized"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.server_message(), Some("Unauthorized"));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_envelope(200, "<html>"), Err(AuthError::Decode(_))));
        assert_eq!(
            decode_envelope(502, "Bad Gateway"),
            Err(AuthError::Transport("HTTP 502".to_string()))
        );
    }
}
