//! Patients panel requests.

use clinic_patients::{PatientField, PatientId};
use serde::{Deserialize, Serialize};

/// Refilter the table. Sent on every keystroke of the search box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPatientsReq {
    pub query: String,
}

impl SearchPatientsReq {
    pub const PATH: &'static str = "patients/search";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAddPatientReq;

impl OpenAddPatientReq {
    pub const PATH: &'static str = "patients/open-add";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenEditPatientReq {
    pub id: PatientId,
}

impl OpenEditPatientReq {
    pub const PATH: &'static str = "patients/open-edit";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDialogUpdateReq {
    pub field: PatientField,
    pub value: String,
}

impl PatientDialogUpdateReq {
    pub const PATH: &'static str = "patients/dialog/update-field";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePatientReq;

impl SavePatientReq {
    pub const PATH: &'static str = "patients/dialog/save";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelPatientDialogReq;

impl CancelPatientDialogReq {
    pub const PATH: &'static str = "patients/dialog/cancel";
}

/// Ask to delete; opens a confirmation naming the patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDeletePatientReq {
    pub id: PatientId,
}

impl RequestDeletePatientReq {
    pub const PATH: &'static str = "patients/request-delete";
}
