use tracing::{info, warn};

use crate::model::{Account, LoginInput, Role, User};
use crate::service::{AuthError, Authenticator};

/// Fixed, in-memory account table.
///
/// Matching is exact on username, password and role. The username is
/// trimmed first; the password is taken as typed.
pub struct StaticAccounts {
    accounts: Vec<Account>,
}

impl StaticAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The two accounts the clinic ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Account::new("1", "admin", "admin123", Role::Admin, "Dr. Admin User"),
            Account::new("2", "employee", "emp123", Role::Employee, "Staff Member"),
        ])
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for StaticAccounts {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Authenticator for StaticAccounts {
    fn authenticate(&self, input: &LoginInput) -> Result<User, AuthError> {
        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let found = self.accounts.iter().find(|a| {
            a.username == username && a.password == input.password && a.role == input.account_type
        });

        match found {
            Some(account) => {
                info!(username, role = %account.role, "login accepted");
                Ok(account.to_user())
            }
            None => {
                warn!(username, account_type = %input.account_type, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
