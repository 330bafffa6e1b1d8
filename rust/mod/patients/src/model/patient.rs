use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient identifier: `P` followed by a zero-padded sequence number.
///
/// Ordering follows the numeric sequence, so `P10000 > P9999` even
/// though the text sorts the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PatientId(u32);

impl PatientId {
    pub fn from_seq(seq: u32) -> Self {
        Self(seq)
    }

    pub fn seq(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    /// Accepts `P0007`, `p7` and `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(&['P', 'p'][..]).unwrap_or(s);
        digits
            .parse::<u32>()
            .map(PatientId)
            .map_err(|_| format!("invalid patient id '{}'", s))
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PatientId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    /// `YYYY-MM-DD`, stamped at creation and never changed.
    pub registered_date: String,
}

impl Patient {
    /// Overwrite every editable field. `id` and `registered_date` stay.
    pub fn apply(&mut self, draft: PatientDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.gender = draft.gender;
        self.contact = draft.contact;
        self.email = draft.email;
        self.address = draft.address;
    }
}

/// Editable patient fields, already parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}
