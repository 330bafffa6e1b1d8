//! Patients panel state: `patients/table` and `patients/dialog`.

use clinic_patients::{Patient, PatientForm, PatientId};
use serde::{Deserialize, Serialize};

/// The filtered table as currently displayed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientTable {
    pub rows: Vec<PatientRow>,
    pub query: String,
    /// Records in the registry, filtered or not.
    pub total: usize,
}

impl PatientTable {
    pub const PATH: &'static str = "patients/table";

    pub const COLUMNS: [&'static str; 7] =
        ["ID", "Name", "Age", "Gender", "Contact", "Email", "Registered"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRow {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub registered_date: String,
}

impl From<&Patient> for PatientRow {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            age: p.age,
            gender: p.gender.clone(),
            contact: p.contact.clone(),
            email: p.email.clone(),
            registered_date: p.registered_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogMode {
    Add,
    Edit(PatientId),
}

/// Modal add/edit form. Stored as `Option<PatientDialog>`; `None` means closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDialog {
    pub mode: DialogMode,
    pub title: String,
    pub form: PatientForm,
}

impl PatientDialog {
    pub const PATH: &'static str = "patients/dialog";

    pub fn add() -> Self {
        Self {
            mode: DialogMode::Add,
            title: "Add New Patient".into(),
            form: PatientForm::default(),
        }
    }

    pub fn edit(patient: &Patient) -> Self {
        Self {
            mode: DialogMode::Edit(patient.id),
            title: "Edit Patient".into(),
            form: PatientForm::from_patient(patient),
        }
    }
}
