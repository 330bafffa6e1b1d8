//! Patients panel handler implementations.

use tracing::{debug, warn};

use clinic_core::ClinicError;
use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, helpers};
use crate::request::*;
use crate::state::*;

/// Handle `patients/search`.
pub async fn handle_search(req: &SearchPatientsReq, ctx: &ClinicContext, store: &StateStore) {
    let mut guard = ctx.session().lock().await;
    let Some(session) = guard.as_mut() else {
        debug!("search without a session");
        return;
    };
    session.query = req.query.clone();
    helpers::publish_table(session, store);
}

/// Handle `patients/open-add`.
pub async fn handle_open_add(ctx: &ClinicContext, store: &StateStore) {
    if ctx.session().lock().await.is_none() {
        debug!("open-add without a session");
        return;
    }
    store.set(PatientDialog::PATH, Some(PatientDialog::add()));
}

/// Handle `patients/open-edit`.
pub async fn handle_open_edit(req: &OpenEditPatientReq, ctx: &ClinicContext, store: &StateStore) {
    let guard = ctx.session().lock().await;
    let Some(session) = guard.as_ref() else {
        debug!("open-edit without a session");
        return;
    };
    match session.patients.get(req.id) {
        Some(patient) => store.set(PatientDialog::PATH, Some(PatientDialog::edit(patient))),
        None => warn!(id = %req.id, "edit requested for unknown patient"),
    }
}

/// Handle `patients/dialog/update-field`.
pub async fn handle_dialog_update(req: &PatientDialogUpdateReq, store: &StateStore) {
    let Some(mut dialog) = helpers::patient_dialog(store) else {
        debug!(field = %req.field, "no patient dialog open");
        return;
    };
    dialog.form.set(req.field, req.value.clone());
    store.set(PatientDialog::PATH, Some(dialog));
}

/// Handle `patients/dialog/save`: create or update, then close.
pub async fn handle_save(ctx: &ClinicContext, store: &StateStore) {
    let Some(dialog) = helpers::patient_dialog(store) else {
        debug!("save without an open dialog");
        return;
    };
    let mut guard = ctx.session().lock().await;
    let Some(session) = guard.as_mut() else {
        debug!("save without a session");
        return;
    };

    let draft = dialog.form.to_draft();
    match dialog.mode {
        DialogMode::Add => {
            session.patients.create(draft);
        }
        DialogMode::Edit(id) => {
            if let Err(e) = session.patients.update(id, draft) {
                let e = ClinicError::from(e);
                warn!(code = e.error_code(), error = %e, "save dropped");
            }
        }
    }

    store.set::<Option<PatientDialog>>(PatientDialog::PATH, None);
    helpers::publish_table(session, store);
}

/// Handle `patients/dialog/cancel`.
pub async fn handle_cancel(store: &StateStore) {
    store.set::<Option<PatientDialog>>(PatientDialog::PATH, None);
}

/// Handle `patients/request-delete`: open the confirmation.
pub async fn handle_request_delete(
    req: &RequestDeletePatientReq,
    ctx: &ClinicContext,
    store: &StateStore,
) {
    let guard = ctx.session().lock().await;
    let Some(session) = guard.as_ref() else {
        debug!("delete without a session");
        return;
    };
    match session.patients.get(req.id) {
        Some(patient) => store.set(
            ConfirmDialog::PATH,
            Some(ConfirmDialog::delete_patient(patient.id, &patient.name)),
        ),
        None => warn!(id = %req.id, "delete requested for unknown patient"),
    }
}
