//! App-level state, stored at `app/route`.

use serde::{Deserialize, Serialize};

/// Which screen the renderer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRoute(pub String);

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    pub const LOGIN: &'static str = "/login";
    pub const DASHBOARD: &'static str = "/dashboard";

    pub fn login() -> Self {
        Self(Self::LOGIN.into())
    }

    pub fn dashboard() -> Self {
        Self(Self::DASHBOARD.into())
    }

    pub fn is_dashboard(&self) -> bool {
        self.0 == Self::DASHBOARD
    }
}
