//! User-visible text for both panels

use serde::{Deserialize, Serialize};

/// Display language of the portal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn messages(self) -> Messages {
        match self {
            Locale::ZhCn => Messages::zh_cn(),
            Locale::En => Messages::en(),
        }
    }
}

/// Message catalogue, one entry per distinct notice
///
/// `password_too_short` carries a `{min}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub fill_all_fields: &'static str,
    pub password_mismatch: &'static str,
    pub password_too_short: &'static str,
    pub login_success: &'static str,
    pub login_rejected: &'static str,
    pub login_failed: &'static str,
    pub register_success: &'static str,
    pub register_failed: &'static str,
    pub invalid_callback: &'static str,
}

impl Messages {
    pub const fn zh_cn() -> Self {
        Self {
            fill_all_fields: "请填写所有字段",
            password_mismatch: "两次密码输入不一致",
            password_too_short: "密码长度不能少于{min}位",
            login_success: "登录成功！",
            login_rejected: "用户名或密码错误",
            login_failed: "登录失败",
            register_success: "注册成功",
            register_failed: "注册失败",
            invalid_callback: "回调 URL 无效",
        }
    }

    pub const fn en() -> Self {
        Self {
            fill_all_fields: "Please fill in all fields",
            password_mismatch: "Passwords do not match",
            password_too_short: "Password must be at least {min} characters",
            login_success: "Login successful!",
            login_rejected: "Invalid username or password",
            login_failed: "Login failed",
            register_success: "Registration successful",
            register_failed: "Registration failed",
            invalid_callback: "Invalid callback URL",
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Locale::default().messages()
    }
}
