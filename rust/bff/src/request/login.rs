//! Login screen requests.

use std::fmt;

use clinic_auth::Role;
use serde::{Deserialize, Serialize};

use crate::state::LoginField;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUpdateFieldReq {
    pub field: LoginField,
    pub value: String,
}

impl LoginUpdateFieldReq {
    pub const PATH: &'static str = "login/update-field";
}

impl fmt::Debug for LoginUpdateFieldReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = match self.field {
            LoginField::Password => &"<redacted>",
            LoginField::Username => &self.value,
        };
        f.debug_struct("LoginUpdateFieldReq")
            .field("field", &self.field)
            .field("value", value)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAccountTypeReq {
    pub account_type: Role,
}

impl SelectAccountTypeReq {
    pub const PATH: &'static str = "login/select-account-type";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglePasswordReq;

impl TogglePasswordReq {
    pub const PATH: &'static str = "login/toggle-password";
}

/// Show the administrator contact notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordReq;

impl ForgotPasswordReq {
    pub const PATH: &'static str = "login/forgot-password";
}

/// Close the notice (the OK button).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissNoticeReq;

impl DismissNoticeReq {
    pub const PATH: &'static str = "login/dismiss-notice";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_value_redacted_in_debug() {
        let req = LoginUpdateFieldReq {
            field: LoginField::Password,
            value: "admin123".into(),
        };
        assert!(!format!("{:?}", req).contains("admin123"));

        let req = LoginUpdateFieldReq {
            field: LoginField::Username,
            value: "admin".into(),
        };
        assert!(format!("{:?}", req).contains("admin"));
    }
}
