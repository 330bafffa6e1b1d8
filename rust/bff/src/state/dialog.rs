//! Yes/no confirmation, stored at `dialog/confirm` as `Option<ConfirmDialog>`.

use clinic_patients::PatientId;
use serde::{Deserialize, Serialize};

/// What runs when the user answers yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmAction {
    DeletePatient(PatientId),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmDialog {
    pub const PATH: &'static str = "dialog/confirm";

    pub fn delete_patient(id: PatientId, name: &str) -> Self {
        Self {
            title: "Delete Patient".into(),
            message: format!("Are you sure you want to delete patient '{}'?", name),
            action: ConfirmAction::DeletePatient(id),
        }
    }

    pub fn logout() -> Self {
        Self {
            title: "Logout".into(),
            message: "Are you sure you want to logout?".into(),
            action: ConfirmAction::Logout,
        }
    }
}
