//! Confirmation dialog handler.

use tracing::{debug, info, warn};

use clinic_core::ClinicError;
use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, auth_handlers, helpers};
use crate::request::*;
use crate::state::*;

/// Handle `dialog/answer`. The dialog closes either way; only yes runs
/// the pending action.
pub async fn handle_answer(req: &AnswerConfirmReq, ctx: &ClinicContext, store: &StateStore) {
    let Some(dialog) = helpers::confirm_dialog(store) else {
        debug!("answer without an open confirmation");
        return;
    };
    store.set::<Option<ConfirmDialog>>(ConfirmDialog::PATH, None);

    if !req.accepted {
        debug!(action = ?dialog.action, "confirmation declined");
        return;
    }

    match dialog.action {
        ConfirmAction::DeletePatient(id) => {
            let mut guard = ctx.session().lock().await;
            let Some(session) = guard.as_mut() else {
                debug!("delete confirmed without a session");
                return;
            };
            match session.patients.remove(id) {
                Ok(removed) => {
                    info!(id = %removed.id, "patient removed after confirmation");
                    helpers::publish_table(session, store);
                }
                Err(e) => {
                    let e = ClinicError::from(e);
                    warn!(code = e.error_code(), error = %e, "delete dropped");
                }
            }
        }
        ConfirmAction::Logout => auth_handlers::logout_confirmed(ctx, store).await,
    }
}
