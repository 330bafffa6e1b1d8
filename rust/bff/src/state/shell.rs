//! Dashboard chrome: `shell/header`, `shell/nav`, `shell/panel`.

use clinic_auth::{Role, User};
use clinic_shell::{ModuleId, NavItem, Navigator, Panel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderState {
    /// Upper-cased clinic name.
    pub title: String,
    pub user_name: String,
    pub role: Role,
}

impl HeaderState {
    pub const PATH: &'static str = "shell/header";

    pub fn new(clinic_name: &str, user: &User) -> Self {
        Self {
            title: clinic_name.to_uppercase(),
            user_name: user.full_name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub items: Vec<NavItem>,
    pub current: ModuleId,
}

impl NavState {
    pub const PATH: &'static str = "shell/nav";
}

impl From<&Navigator> for NavState {
    fn from(nav: &Navigator) -> Self {
        Self {
            items: nav.items(),
            current: nav.current(),
        }
    }
}

/// The active panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub module: ModuleId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl PanelState {
    pub const PATH: &'static str = "shell/panel";
}

impl From<Panel> for PanelState {
    fn from(p: Panel) -> Self {
        Self {
            module: p.module,
            title: p.title,
            badge: p.badge,
            info: p.info,
        }
    }
}
