use leptos::*;
use leptos_meta::*;

mod api;
mod browser;
pub mod error;
pub mod mode;
mod pages;

use pages::AuthPortal;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser::load_config());

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate-ui.css"/>
        <Title text="AuthGate - Sign in"/>
        <Meta name="description" content="AuthGate login and registration"/>

        <main class="container">
            <AuthPortal/>
        </main>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    logging::log!("AuthGate portal starting");
    mount_to_body(App);
}
