//! Auth requests.

use serde::{Deserialize, Serialize};

/// Submit the login form as it stands in `login/form`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReq;

impl LoginReq {
    pub const PATH: &'static str = "auth/login";
}

/// Ask to log out. Opens a confirmation; the session ends only on yes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutReq;

impl LogoutReq {
    pub const PATH: &'static str = "auth/logout";
}
