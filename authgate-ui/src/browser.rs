//! Access to the page address, navigation and page-supplied configuration

use authgate_common::PortalConfig;
use leptos::*;

use crate::error::js_error_message;

/// `<meta name=...>` whose `content` holds the portal configuration as JSON
pub const CONFIG_META: &str = "authgate-config";

/// Full address of the current page, or an empty string if unavailable
pub fn current_href() -> String {
    match window().location().href() {
        Ok(href) => href,
        Err(e) => {
            logging::warn!("Failed to read page location: {}", js_error_message(&e));
            String::new()
        }
    }
}

/// Leave the page for `url`
pub fn navigate(url: &str) -> Result<(), String> {
    window()
        .location()
        .set_href(url)
        .map_err(|e| js_error_message(&e))
}

/// Read the portal configuration from the page, falling back to defaults
pub fn load_config() -> PortalConfig {
    let selector = format!("meta[name=\"{}\"]", CONFIG_META);
    let content = match document().query_selector(&selector) {
        Ok(Some(meta)) => meta.get_attribute("content"),
        Ok(None) => None,
        Err(e) => {
            logging::warn!("Config lookup failed: {}", js_error_message(&e));
            None
        }
    };

    match content {
        Some(json) => PortalConfig::from_json(&json).unwrap_or_else(|e| {
            logging::error!("Invalid {} content, using defaults: {}", CONFIG_META, e);
            PortalConfig::default()
        }),
        None => PortalConfig::default(),
    }
}
