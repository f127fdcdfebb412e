//! Portal configuration

use serde::{Deserialize, Serialize};

use crate::messages::{Locale, Messages};
use crate::validation::MIN_PASSWORD_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Prefix of the auth endpoints, e.g. `/api` or `https://sso.example.com/api`
    pub api_base: String,
    /// Delay before switching to the login panel after registering
    pub redirect_delay_ms: u32,
    pub min_password_len: usize,
    pub locale: Locale,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            redirect_delay_ms: 3000,
            min_password_len: MIN_PASSWORD_LEN,
            locale: Locale::default(),
        }
    }
}

impl PortalConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn messages(&self) -> Messages {
        self.locale.messages()
    }

    pub fn login_url(&self) -> String {
        self.endpoint("/auth/login")
    }

    pub fn register_url(&self) -> String {
        self.endpoint("/auth/register")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.login_url(), "/api/auth/login");
        assert_eq!(config.register_url(), "/api/auth/register");
        assert_eq!(config.redirect_delay_ms, 3000);
        assert_eq!(config.min_password_len, 6);
    }

    #[test]
    fn test_partial_json() {
        let config = PortalConfig::from_json(r#"{"api_base": "https://sso.example.com/api/", "locale": "en"}"#).unwrap();
        assert_eq!(config.login_url(), "https://sso.example.com/api/auth/login");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.redirect_delay_ms, 3000);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PortalConfig::from_json("{not json").is_err());
        assert!(PortalConfig::from_json(r#"{"redirect_delay_ms": "soon"}"#).is_err());
    }
}
