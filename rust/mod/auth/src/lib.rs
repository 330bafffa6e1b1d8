//! Auth module: roles, session users and the static account table.
//!
//! # Usage
//!
//! ```ignore
//! use clinic_auth::{Authenticator, LoginInput, Role, StaticAccounts};
//!
//! let accounts = StaticAccounts::builtin();
//! let user = accounts.authenticate(&LoginInput::new("admin", "admin123", Role::Admin))?;
//! ```

pub mod model;
pub mod service;

pub use model::{Account, LoginInput, Role, User};
pub use service::{AuthError, Authenticator, StaticAccounts};
