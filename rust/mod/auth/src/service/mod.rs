mod accounts;

pub use accounts::StaticAccounts;

use thiserror::Error;

use clinic_core::ClinicError;

use crate::model::{LoginInput, User};

/// Login failure. The messages are the inline texts of the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both username and password")]
    MissingCredentials,

    #[error("Invalid username, password, or account type")]
    InvalidCredentials,
}

impl From<AuthError> for ClinicError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingCredentials => ClinicError::Validation(e.to_string()),
            AuthError::InvalidCredentials => ClinicError::Unauthorized(e.to_string()),
        }
    }
}

/// Checks a login triple against some account source.
///
/// On success the returned `User` becomes the session identity; on
/// failure no session may be created.
pub trait Authenticator: Send + Sync + 'static {
    fn authenticate(&self, input: &LoginInput) -> Result<User, AuthError>;
}
