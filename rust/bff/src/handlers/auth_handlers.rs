//! Auth handler implementations.

use tracing::{debug, info};

use clinic_auth::{AuthError, LoginInput};
use clinic_core::ClinicError;
use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, Session, app_handlers, helpers};
use crate::state::*;

/// Handle `auth/login`.
///
/// Validates the stored login form. On success the session is created
/// and the whole dashboard is published; on failure only the form changes.
/// Ignored while a session is active: leaving one goes through logout.
pub async fn handle_login(ctx: &ClinicContext, store: &StateStore) {
    let mut guard = ctx.session().lock().await;
    if guard.is_some() {
        debug!("login while a session is active");
        return;
    }

    let mut form = helpers::login_form(store);
    let input = LoginInput::new(&form.username, &form.password, form.account_type);

    let user = match ctx.authenticator.authenticate(&input) {
        Ok(user) => user,
        Err(e) => {
            if e == AuthError::InvalidCredentials {
                form.password.clear();
                form.focus = LoginField::Password;
            }
            let err = ClinicError::from(e);
            form.error_code = Some(err.error_code().to_string());
            form.error = Some(err.to_string());
            store.set(LoginForm::PATH, form);
            return;
        }
    };

    let session = Session::new(user.clone(), ctx.clock());
    store.set(AuthState::PATH, AuthState::authenticated(user.clone()));
    store.set(HeaderState::PATH, HeaderState::new(&ctx.config.clinic_name, &user));
    helpers::publish_navigation(&session, store);
    helpers::publish_table(&session, store);
    helpers::close_dialogs(store);
    store.set(LoginForm::PATH, LoginForm::new(ctx.default_account_type()));

    *guard = Some(session);
    store.set(AppRoute::PATH, AppRoute::dashboard());
    info!(user = %user.username, role = %user.role, "session started");
}

/// Handle `auth/logout`: ask first.
pub async fn handle_logout(ctx: &ClinicContext, store: &StateStore) {
    if ctx.session().lock().await.is_none() {
        debug!("logout without a session");
        return;
    }
    store.set(ConfirmDialog::PATH, Some(ConfirmDialog::logout()));
}

/// End the session after the user confirmed.
pub(crate) async fn logout_confirmed(ctx: &ClinicContext, store: &StateStore) {
    let ended = ctx.session().lock().await.take();
    if let Some(session) = ended {
        info!(
            user = %session.user.username,
            patients = session.patients.len(),
            "session ended"
        );
    }
    app_handlers::show_login(ctx, store);
}
