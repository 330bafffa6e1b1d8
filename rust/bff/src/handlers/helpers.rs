//! Shared helpers for handlers.

use clinic_flux::StateStore;
use clinic_shell::panel_for;

use crate::handlers::Session;
use crate::state::*;

/// Current login form, or a fresh one when none is stored yet.
pub fn login_form(store: &StateStore) -> LoginForm {
    store
        .get_cloned::<LoginForm>(LoginForm::PATH)
        .unwrap_or_else(|| LoginForm::new(clinic_auth::Role::Admin))
}

pub fn patient_dialog(store: &StateStore) -> Option<PatientDialog> {
    store
        .get_cloned::<Option<PatientDialog>>(PatientDialog::PATH)
        .flatten()
}

pub fn confirm_dialog(store: &StateStore) -> Option<ConfirmDialog> {
    store
        .get_cloned::<Option<ConfirmDialog>>(ConfirmDialog::PATH)
        .flatten()
}

/// Build the visible table from the session's registry and query.
pub fn build_table(session: &Session) -> PatientTable {
    PatientTable {
        rows: session.patients.filter(&session.query).map(PatientRow::from).collect(),
        query: session.query.clone(),
        total: session.patients.len(),
    }
}

pub fn publish_table(session: &Session, store: &StateStore) {
    store.set(PatientTable::PATH, build_table(session));
}

/// Publish sidebar and active panel for the session's current module.
pub fn publish_navigation(session: &Session, store: &StateStore) {
    store.set(NavState::PATH, NavState::from(&session.navigator));
    store.set(
        PanelState::PATH,
        PanelState::from(panel_for(session.navigator.current())),
    );
}

pub fn close_dialogs(store: &StateStore) {
    store.set::<Option<PatientDialog>>(PatientDialog::PATH, None);
    store.set::<Option<ConfirmDialog>>(ConfirmDialog::PATH, None);
}
