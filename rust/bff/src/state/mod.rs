//! State definitions.
//!
//! Each file defines the types stored at one or more well-known paths.
//! Every stored type carries its path as a `PATH` const.

pub mod app;
pub mod auth;
pub mod dialog;
pub mod login;
pub mod patients;
pub mod shell;

pub use app::AppRoute;
pub use auth::{AuthPhase, AuthState};
pub use dialog::{ConfirmAction, ConfirmDialog};
pub use login::{LoginField, LoginForm, Notice};
pub use patients::{DialogMode, PatientDialog, PatientRow, PatientTable};
pub use shell::{HeaderState, NavState, PanelState};
