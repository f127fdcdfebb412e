//! Which of the two panels is on screen

/// The visible panel. Exactly one panel is shown for any value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Login,
    Register,
}

impl UiMode {
    pub fn is_visible(self, panel: UiMode) -> bool {
        self == panel
    }

    /// The panel hidden by this mode
    pub fn other(self) -> UiMode {
        match self {
            UiMode::Login => UiMode::Register,
            UiMode::Register => UiMode::Login,
        }
    }

    /// Class list for `panel` while this mode is active
    pub fn panel_class(self, panel: UiMode) -> &'static str {
        if self.is_visible(panel) {
            "auth-panel"
        } else {
            "auth-panel hidden"
        }
    }

    pub fn form_id(self) -> &'static str {
        match self {
            UiMode::Login => "login-form",
            UiMode::Register => "register-form",
        }
    }

    pub fn message_id(self) -> &'static str {
        match self {
            UiMode::Login => "login-message",
            UiMode::Register => "register-message",
        }
    }
}
