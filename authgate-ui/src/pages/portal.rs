use std::time::Duration;

use authgate_common::{submit_login, submit_register, Locale, LoginForm, Notice, Outcome, PortalConfig, RegisterForm};
use leptos::*;

use crate::api::HttpAuthService;
use crate::browser;
use crate::error::InlineMessage;
use crate::mode::UiMode;

/// Reactive state behind both panels
#[derive(Clone, Copy)]
pub struct PortalState {
    pub mode: RwSignal<UiMode>,

    pub login_username: RwSignal<String>,
    pub login_password: RwSignal<String>,
    pub login_message: RwSignal<Option<Notice>>,
    pub login_pending: RwSignal<bool>,

    pub register_username: RwSignal<String>,
    pub register_email: RwSignal<String>,
    pub register_password: RwSignal<String>,
    pub register_confirm: RwSignal<String>,
    pub register_message: RwSignal<Option<Notice>>,
    pub register_pending: RwSignal<bool>,
}

impl PortalState {
    pub fn new() -> Self {
        Self {
            mode: create_rw_signal(UiMode::Login),
            login_username: create_rw_signal(String::new()),
            login_password: create_rw_signal(String::new()),
            login_message: create_rw_signal(None),
            login_pending: create_rw_signal(false),
            register_username: create_rw_signal(String::new()),
            register_email: create_rw_signal(String::new()),
            register_password: create_rw_signal(String::new()),
            register_confirm: create_rw_signal(String::new()),
            register_message: create_rw_signal(None),
            register_pending: create_rw_signal(false),
        }
    }

    fn message(&self, panel: UiMode) -> RwSignal<Option<Notice>> {
        match panel {
            UiMode::Login => self.login_message,
            UiMode::Register => self.register_message,
        }
    }

    fn pending(&self, panel: UiMode) -> RwSignal<bool> {
        match panel {
            UiMode::Login => self.login_pending,
            UiMode::Register => self.register_pending,
        }
    }

    /// Show `panel`, hide the other one and clear its message
    pub fn switch_to(&self, panel: UiMode) {
        self.mode.set(panel);
        self.message(panel.other()).set(None);
    }

    pub fn toggle_to_login(&self) {
        self.switch_to(UiMode::Login);
    }

    pub fn toggle_to_register(&self) {
        self.switch_to(UiMode::Register);
    }

    /// Replace whatever `panel` currently shows
    pub fn show_message(&self, panel: UiMode, notice: Notice) {
        self.message(panel).set(Some(notice));
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm {
            username: self.login_username.get_untracked(),
            password: self.login_password.get_untracked(),
        }
    }

    pub fn register_form(&self) -> RegisterForm {
        RegisterForm {
            username: self.register_username.get_untracked(),
            email: self.register_email.get_untracked(),
            password: self.register_password.get_untracked(),
            confirm_password: self.register_confirm.get_untracked(),
        }
    }

    /// Mark `panel` as submitting. Returns false if a submission is already
    /// in flight.
    pub fn begin(&self, panel: UiMode) -> bool {
        let pending = self.pending(panel);
        if pending.get_untracked() {
            return false;
        }
        pending.set(true);
        true
    }

    pub fn settle(&self, panel: UiMode) {
        self.pending(panel).set(false);
    }

    /// Login panel after a completed registration
    pub fn finish_registration(&self, username: String) {
        self.toggle_to_login();
        self.login_username.set(username);
        self.login_password.set(String::new());
    }

    /// Apply a settled submission from `panel`. A successful redirect keeps
    /// the panel pending since the page is being left.
    pub fn apply(&self, panel: UiMode, outcome: Outcome, config: &PortalConfig) {
        match outcome {
            Outcome::Redirect(url) => match browser::navigate(&url) {
                Ok(()) => return,
                Err(e) => {
                    logging::error!("Navigation to callback failed: {}", e);
                    self.show_message(panel, Notice::error(config.messages().invalid_callback));
                }
            },
            Outcome::Notice(notice) => self.show_message(panel, notice),
            Outcome::SwitchToLogin { notice, username } => {
                self.show_message(panel, notice);
                let state = *self;
                let delay = Duration::from_millis(config.redirect_delay_ms as u64);
                set_timeout(move || state.finish_registration(username), delay);
            }
        }
        self.settle(panel);
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AuthPortal() -> impl IntoView {
    let config = store_value(use_context::<PortalConfig>().unwrap_or_default());
    let state = PortalState::new();
    let labels = match config.with_value(|c| c.locale) {
        Locale::En => LABELS_EN,
        Locale::ZhCn => LABELS_ZH,
    };

    let on_login = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !state.begin(UiMode::Login) {
            logging::log!("Login already in progress");
            return;
        }

        let form = state.login_form();
        let config = config.get_value();
        spawn_local(async move {
            let service = HttpAuthService::new(&config);
            let outcome = submit_login(&service, &form, &browser::current_href(), &config).await;
            state.apply(UiMode::Login, outcome, &config);
        });
    };

    let on_register = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !state.begin(UiMode::Register) {
            logging::log!("Registration already in progress");
            return;
        }

        let form = state.register_form();
        let config = config.get_value();
        spawn_local(async move {
            let service = HttpAuthService::new(&config);
            let outcome = submit_register(&service, &form, &browser::current_href(), &config).await;
            state.apply(UiMode::Register, outcome, &config);
        });
    };

    view! {
        <div class="auth-page">
            <div id={UiMode::Login.form_id()} class={move || state.mode.get().panel_class(UiMode::Login)}>
                <h2>{labels.login_title}</h2>
                <form on:submit=on_login>
                    <div class="form-group">
                        <label for="login-username">{labels.username}</label>
                        <input
                            id="login-username"
                            type="text"
                            autocomplete="username"
                            on:input=move |ev| state.login_username.set(event_target_value(&ev))
                            prop:value=state.login_username
                        />
                    </div>

                    <div class="form-group">
                        <label for="login-password">{labels.password}</label>
                        <input
                            id="login-password"
                            type="password"
                            autocomplete="current-password"
                            on:input=move |ev| state.login_password.set(event_target_value(&ev))
                            prop:value=state.login_password
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || state.login_pending.get()
                    >
                        {labels.login_button}
                    </button>
                </form>

                <div id={UiMode::Login.message_id()}>
                    {move || state.login_message.get().map(|notice| view! { <InlineMessage notice=notice/> })}
                </div>

                <p class="switch">
                    <a href="#" on:click=move |ev| { ev.prevent_default(); state.toggle_to_register(); }>
                        {labels.to_register}
                    </a>
                </p>
            </div>

            <div id={UiMode::Register.form_id()} class={move || state.mode.get().panel_class(UiMode::Register)}>
                <h2>{labels.register_title}</h2>
                <form on:submit=on_register>
                    <div class="form-group">
                        <label for="register-username">{labels.username}</label>
                        <input
                            id="register-username"
                            type="text"
                            autocomplete="username"
                            on:input=move |ev| state.register_username.set(event_target_value(&ev))
                            prop:value=state.register_username
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-email">{labels.email}</label>
                        <input
                            id="register-email"
                            type="email"
                            autocomplete="email"
                            on:input=move |ev| state.register_email.set(event_target_value(&ev))
                            prop:value=state.register_email
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-password">{labels.password}</label>
                        <input
                            id="register-password"
                            type="password"
                            autocomplete="new-password"
                            on:input=move |ev| state.register_password.set(event_target_value(&ev))
                            prop:value=state.register_password
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-confirm-password">{labels.confirm_password}</label>
                        <input
                            id="register-confirm-password"
                            type="password"
                            autocomplete="new-password"
                            on:input=move |ev| state.register_confirm.set(event_target_value(&ev))
                            prop:value=state.register_confirm
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || state.register_pending.get()
                    >
                        {labels.register_button}
                    </button>
                </form>

                <div id={UiMode::Register.message_id()}>
                    {move || state.register_message.get().map(|notice| view! { <InlineMessage notice=notice/> })}
                </div>

                <p class="switch">
                    <a href="#" on:click=move |ev| { ev.prevent_default(); state.toggle_to_login(); }>
                        {labels.to_login}
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Static labels of the two forms
#[derive(Clone, Copy)]
struct Labels {
    login_title: &'static str,
    register_title: &'static str,
    username: &'static str,
    email: &'static str,
    password: &'static str,
    confirm_password: &'static str,
    login_button: &'static str,
    register_button: &'static str,
    to_register: &'static str,
    to_login: &'static str,
}

const LABELS_ZH: Labels = Labels {
    login_title: "登录",
    register_title: "注册",
    username: "用户名",
    email: "邮箱",
    password: "密码",
    confirm_password: "确认密码",
    login_button: "登录",
    register_button: "注册",
    to_register: "没有账号？立即注册",
    to_login: "已有账号？返回登录",
};

const LABELS_EN: Labels = Labels {
    login_title: "Sign in",
    register_title: "Create account",
    username: "Username",
    email: "Email",
    password: "Password",
    confirm_password: "Confirm password",
    login_button: "Sign in",
    register_button: "Register",
    to_register: "No account? Register",
    to_login: "Already registered? Sign in",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(test: impl FnOnce()) {
        let runtime = create_runtime();
        test();
        runtime.dispose();
    }

    #[test]
    fn test_toggles_keep_one_panel_visible() {
        with_runtime(|| {
            let state = PortalState::new();
            let visible = |state: &PortalState| {
                [UiMode::Login, UiMode::Register]
                    .iter()
                    .filter(|panel| state.mode.get_untracked().is_visible(**panel))
                    .count()
            };

            assert_eq!(visible(&state), 1);
            state.toggle_to_login();
            assert_eq!(visible(&state), 1);
            state.toggle_to_register();
            assert_eq!(visible(&state), 1);
            assert_eq!(state.mode.get_untracked(), UiMode::Register);
            state.toggle_to_register();
            assert_eq!(state.mode.get_untracked(), UiMode::Register);
        });
    }

    #[test]
    fn test_toggle_clears_hidden_panel_message() {
        with_runtime(|| {
            let state = PortalState::new();
            state.show_message(UiMode::Login, Notice::error("bad password"));
            state.show_message(UiMode::Register, Notice::error("mismatch"));

            state.toggle_to_register();
            assert_eq!(state.login_message.get_untracked(), None);
            assert_eq!(state.register_message.get_untracked(), Some(Notice::error("mismatch")));

            state.toggle_to_login();
            assert_eq!(state.register_message.get_untracked(), None);
        });
    }

    #[test]
    fn test_show_message_overwrites() {
        with_runtime(|| {
            let state = PortalState::new();
            state.show_message(UiMode::Login, Notice::error("first"));
            state.show_message(UiMode::Login, Notice::success("second"));
            assert_eq!(state.login_message.get_untracked(), Some(Notice::success("second")));
        });
    }

    #[test]
    fn test_in_flight_guard() {
        with_runtime(|| {
            let state = PortalState::new();
            assert!(state.begin(UiMode::Login));
            assert!(!state.begin(UiMode::Login));
            assert!(state.begin(UiMode::Register));

            state.apply(UiMode::Login, Outcome::Notice(Notice::error("nope")), &PortalConfig::default());
            assert!(!state.login_pending.get_untracked());
            assert!(state.register_pending.get_untracked());
            assert!(state.begin(UiMode::Login));
        });
    }

    #[test]
    fn test_finish_registration_fills_login() {
        with_runtime(|| {
            let state = PortalState::new();
            state.toggle_to_register();
            state.login_password.set("stale".to_string());
            state.register_message.set(Some(Notice::success("注册成功")));

            state.finish_registration("bob".to_string());

            assert_eq!(state.mode.get_untracked(), UiMode::Login);
            assert_eq!(state.login_username.get_untracked(), "bob");
            assert_eq!(state.login_password.get_untracked(), "");
            assert_eq!(state.register_message.get_untracked(), None);
        });
    }

    #[test]
    fn test_forms_read_current_inputs() {
        with_runtime(|| {
            let state = PortalState::new();
            state.register_username.set(" bob ".to_string());
            state.register_email.set("bob@example.com".to_string());
            state.register_password.set("secret1".to_string());
            state.register_confirm.set("secret1".to_string());

            let form = state.register_form();
            assert_eq!(form.username, " bob ");
            assert_eq!(form.to_request().username, "bob");
            assert_eq!(state.login_form(), LoginForm::default());
        });
    }
}
