use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Patient, PatientDraft};

/// One input of the add/edit patient dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatientField {
    Name,
    Age,
    Gender,
    Contact,
    Email,
    Address,
}

impl PatientField {
    /// Dialog order.
    pub const ALL: [PatientField; 6] = [
        PatientField::Name,
        PatientField::Age,
        PatientField::Gender,
        PatientField::Contact,
        PatientField::Email,
        PatientField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientField::Name => "name",
            PatientField::Age => "age",
            PatientField::Gender => "gender",
            PatientField::Contact => "contact",
            PatientField::Email => "email",
            PatientField::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatientField::Name => "Name",
            PatientField::Age => "Age",
            PatientField::Gender => "Gender",
            PatientField::Contact => "Contact",
            PatientField::Email => "Email",
            PatientField::Address => "Address",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PatientField::Name => "Full name",
            PatientField::Age => "Age",
            PatientField::Gender => "Male/Female/Other",
            PatientField::Contact => "Phone number",
            PatientField::Email => "Email address",
            PatientField::Address => "Full address",
        }
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PatientField::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| format!("unknown patient field '{}'", s.trim()))
    }
}

/// Raw text of the add/edit dialog, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

impl PatientForm {
    /// Prefill from an existing record (edit dialog).
    pub fn from_patient(p: &Patient) -> Self {
        Self {
            name: p.name.clone(),
            age: p.age.to_string(),
            gender: p.gender.clone(),
            contact: p.contact.clone(),
            email: p.email.clone(),
            address: p.address.clone(),
        }
    }

    pub fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::Name => &self.name,
            PatientField::Age => &self.age,
            PatientField::Gender => &self.gender,
            PatientField::Contact => &self.contact,
            PatientField::Email => &self.email,
            PatientField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PatientField::Name => self.name = value,
            PatientField::Age => self.age = value,
            PatientField::Gender => self.gender = value,
            PatientField::Contact => self.contact = value,
            PatientField::Email => self.email = value,
            PatientField::Address => self.address = value,
        }
    }

    /// Parse into a draft. Text fields are taken verbatim; see
    /// [`parse_age`] for the age rule.
    pub fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            age: parse_age(&self.age),
            gender: self.gender.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

/// Parse the age box.
///
/// Empty means 0. Anything that is not a non-negative integer is also
/// stored as 0 rather than rejected; a warning is logged when that
/// happens so bad input does not vanish silently.
pub fn parse_age(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    match text.parse::<u32>() {
        Ok(age) => age,
        Err(_) => {
            warn!(input = text, "age is not a non-negative integer, storing 0");
            0
        }
    }
}
