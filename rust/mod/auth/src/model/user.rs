use serde::{Deserialize, Serialize};

use super::Role;

/// The authenticated user of one session. Immutable after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub full_name: String,
}

/// One row of the account table. Passwords are plain text.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
}

impl Account {
    pub fn new(id: &str, username: &str, password: &str, role: Role, full_name: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
            full_name: full_name.to_string(),
        }
    }

    /// The session identity for this account (no password).
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
            full_name: self.full_name.clone(),
        }
    }
}

/// The login triple as entered on the login screen.
#[derive(Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    pub account_type: Role,
}

impl LoginInput {
    pub fn new(username: &str, password: &str, account_type: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            account_type,
        }
    }
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .finish()
    }
}
