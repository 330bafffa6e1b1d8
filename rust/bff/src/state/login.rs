//! Login screen state, stored at `login/form`.

use std::fmt;

use clinic_auth::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginField {
    Username,
    Password,
}

/// Informational popup with a single OK button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub account_type: Role,
    pub show_password: bool,
    /// Inline error under the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable code of `error`, e.g. `UNAUTHENTICATED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub focus: LoginField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl LoginForm {
    pub const PATH: &'static str = "login/form";

    pub fn new(account_type: Role) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            account_type,
            show_password: false,
            error: None,
            error_code: None,
            focus: LoginField::Username,
            notice: None,
        }
    }

    /// Password as the renderer should display it.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("show_password", &self.show_password)
            .field("error", &self.error)
            .field("error_code", &self.error_code)
            .field("focus", &self.focus)
            .field("notice", &self.notice)
            .finish()
    }
}
