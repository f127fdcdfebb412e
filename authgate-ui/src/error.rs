//! Inline message display and browser error formatting

use authgate_common::Notice;
use leptos::*;
use wasm_bindgen::JsValue;

/// Message shown inside a panel's message container
#[component]
pub fn InlineMessage(
    /// Notice to display; text is rendered as text, never as markup
    notice: Notice,
) -> impl IntoView {
    view! {
        <div class={message_class(&notice)}>{notice.text}</div>
    }
}

pub fn message_class(notice: &Notice) -> String {
    format!("message {}", notice.class())
}

/// Best-effort text for a JS exception value
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
