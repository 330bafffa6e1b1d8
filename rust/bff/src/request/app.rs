//! App lifecycle requests.

use serde::{Deserialize, Serialize};

/// Reset to the login screen with no session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeReq;

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}
