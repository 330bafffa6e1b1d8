use std::slice;

use tracing::{debug, info};

use super::PatientError;
use crate::model::{Patient, PatientDraft, PatientId};

/// In-memory patient collection for one session.
///
/// Records keep insertion order. Ids come from a counter local to this
/// registry, so a fresh registry starts again at `P0001`.
pub struct PatientRegistry {
    patients: Vec<Patient>,
    next_seq: u32,
    clock: fn() -> String,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::with_clock(clinic_core::today)
    }

    /// Registry with a fixed date source, for deterministic tests.
    pub fn with_clock(clock: fn() -> String) -> Self {
        Self {
            patients: Vec::new(),
            next_seq: 1,
            clock,
        }
    }

    /// Id the next `create` will assign.
    pub fn next_id(&self) -> PatientId {
        PatientId::from_seq(self.next_seq)
    }

    pub fn create(&mut self, draft: PatientDraft) -> &Patient {
        let id = self.next_id();
        self.next_seq += 1;

        let patient = Patient {
            id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            contact: draft.contact,
            email: draft.email,
            address: draft.address,
            registered_date: (self.clock)(),
        };
        info!(id = %id, "patient registered");

        let idx = self.patients.len();
        self.patients.push(patient);
        &self.patients[idx]
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn update(&mut self, id: PatientId, draft: PatientDraft) -> Result<&Patient, PatientError> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PatientError::NotFound(id))?;
        patient.apply(draft);
        info!(id = %id, "patient updated");
        Ok(&*patient)
    }

    pub fn remove(&mut self, id: PatientId) -> Result<Patient, PatientError> {
        let idx = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(PatientError::NotFound(id))?;
        info!(id = %id, "patient deleted");
        Ok(self.patients.remove(idx))
    }

    /// Records whose name contains `query`, ignoring case.
    ///
    /// The empty query matches everything. The returned iterator is lazy
    /// and can be cloned to walk the same view again.
    pub fn filter(&self, query: &str) -> Matches<'_> {
        let needle = query.to_lowercase();
        debug!(query, "filter patients");
        Matches {
            inner: self.patients.iter(),
            needle,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Patient> {
        self.patients.iter()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Filtered view returned by [`PatientRegistry::filter`].
#[derive(Clone)]
pub struct Matches<'a> {
    inner: slice::Iter<'a, Patient>,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Patient;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.inner
            .by_ref()
            .find(|p| needle.is_empty() || p.name.to_lowercase().contains(needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> String {
        "2024-03-15".to_string()
    }

    fn draft(name: &str) -> PatientDraft {
        PatientDraft {
            name: name.to_string(),
            age: 30,
            gender: "Other".into(),
            contact: "555-0100".into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            address: "1 Main St".into(),
        }
    }

    fn registry(names: &[&str]) -> PatientRegistry {
        let mut reg = PatientRegistry::with_clock(fixed_date);
        for name in names {
            reg.create(draft(name));
        }
        reg
    }

    fn names<'a>(it: impl Iterator<Item = &'a Patient>) -> Vec<&'a str> {
        it.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn create_assigns_sequential_ids_and_stamps_date() {
        let mut reg = PatientRegistry::with_clock(fixed_date);
        let first = reg.create(draft("Ana")).clone();
        let second = reg.create(draft("Ben")).clone();

        assert_eq!(first.id.to_string(), "P0001");
        assert_eq!(second.id.to_string(), "P0002");
        assert!(second.id > first.id);
        assert_eq!(first.registered_date, "2024-03-15");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut reg = registry(&["Ana", "Ben"]);
        reg.remove(PatientId::from_seq(2)).unwrap();
        let id = reg.create(draft("Cy")).id;
        assert_eq!(id, PatientId::from_seq(3));
    }

    #[test]
    fn update_preserves_identity() {
        let mut reg = registry(&["Ana"]);
        let id = PatientId::from_seq(1);

        let mut changed = draft("Ana Lima");
        changed.age = 41;
        changed.address = "9 Pine Rd".into();
        let updated = reg.update(id, changed).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.registered_date, "2024-03-15");
        assert_eq!(updated.name, "Ana Lima");
        assert_eq!(updated.age, 41);
        assert_eq!(updated.address, "9 Pine Rd");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut reg = registry(&["Ana"]);
        let err = reg.update(PatientId::from_seq(7), draft("X")).unwrap_err();
        assert_eq!(err, PatientError::NotFound(PatientId::from_seq(7)));
    }

    #[test]
    fn remove_takes_exactly_one_record() {
        let mut reg = registry(&["Ana", "Ben", "Cy"]);
        let removed = reg.remove(PatientId::from_seq(2)).unwrap();

        assert_eq!(removed.name, "Ben");
        assert_eq!(names(reg.iter()), vec!["Ana", "Cy"]);
        assert!(reg.get(PatientId::from_seq(2)).is_none());
        assert!(reg.remove(PatientId::from_seq(2)).is_err());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let reg = registry(&["Ann Smith", "Bob Annex", "Carl"]);

        assert_eq!(names(reg.filter("ann")), vec!["Ann Smith", "Bob Annex"]);
        assert_eq!(names(reg.filter("SMITH")), vec!["Ann Smith"]);
        assert!(reg.filter("zzz").next().is_none());
    }

    #[test]
    fn empty_filter_returns_all_in_insertion_order() {
        let reg = registry(&["Carl", "Ann", "Bob"]);
        assert_eq!(names(reg.filter("")), vec!["Carl", "Ann", "Bob"]);
    }

    #[test]
    fn filter_view_is_restartable() {
        let reg = registry(&["Ann", "Bob", "Anna"]);
        let view = reg.filter("an");

        let first: Vec<_> = names(view.clone());
        let second: Vec<_> = names(view);
        assert_eq!(first, vec!["Ann", "Anna"]);
        assert_eq!(first, second);
    }

    #[test]
    fn filter_matches_name_only() {
        let reg = registry(&["Ann"]);
        assert!(reg.filter("example.com").next().is_none());
    }

    #[test]
    fn fresh_registry_starts_at_one() {
        let reg = PatientRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.next_id().to_string(), "P0001");
    }
}
