//! Shell navigation handler.

use tracing::debug;

use clinic_core::ClinicError;
use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, helpers};
use crate::request::*;

/// Handle `shell/navigate`. Unreachable modules leave state untouched.
pub async fn handle_navigate(req: &NavigateReq, ctx: &ClinicContext, store: &StateStore) {
    let mut guard = ctx.session().lock().await;
    let Some(session) = guard.as_mut() else {
        debug!(module = %req.module, "navigate without a session");
        return;
    };

    match session.navigator.select(req.module) {
        Ok(_) => helpers::publish_navigation(session, store),
        Err(e) => {
            let e = ClinicError::from(e);
            debug!(code = e.error_code(), error = %e, "navigate request dropped");
        }
    }
}
