//! Shell navigation requests.

use clinic_shell::ModuleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateReq {
    pub module: ModuleId,
}

impl NavigateReq {
    pub const PATH: &'static str = "shell/navigate";
}
