//! Application shell: the module catalog, role-gated navigation and the
//! static content of the placeholder panels.

pub mod module;
pub mod navigator;
pub mod panel;

pub use module::ModuleId;
pub use navigator::{NavError, NavItem, Navigator};
pub use panel::{Panel, panel_for};
