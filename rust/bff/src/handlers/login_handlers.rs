//! Login screen handler implementations.
//!
//! Any edit clears the inline error, like retyping after a failed attempt.
//! The form is frozen while someone is logged in.

use tracing::debug;

use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, helpers};
use crate::request::*;
use crate::state::*;

async fn session_active(ctx: &ClinicContext, request: &str) -> bool {
    let active = ctx.session().lock().await.is_some();
    if active {
        debug!(request, "login form request while a session is active");
    }
    active
}

/// Handle `login/update-field`.
pub async fn handle_update_field(req: &LoginUpdateFieldReq, ctx: &ClinicContext, store: &StateStore) {
    if session_active(ctx, LoginUpdateFieldReq::PATH).await {
        return;
    }
    let mut form = helpers::login_form(store);
    match req.field {
        LoginField::Username => form.username = req.value.clone(),
        LoginField::Password => form.password = req.value.clone(),
    }
    form.focus = req.field;
    form.error = None;
    form.error_code = None;
    store.set(LoginForm::PATH, form);
}

/// Handle `login/select-account-type`.
pub async fn handle_select_account_type(
    req: &SelectAccountTypeReq,
    ctx: &ClinicContext,
    store: &StateStore,
) {
    if session_active(ctx, SelectAccountTypeReq::PATH).await {
        return;
    }
    let mut form = helpers::login_form(store);
    form.account_type = req.account_type;
    form.error = None;
    form.error_code = None;
    store.set(LoginForm::PATH, form);
}

/// Handle `login/toggle-password`.
pub async fn handle_toggle_password(ctx: &ClinicContext, store: &StateStore) {
    if session_active(ctx, TogglePasswordReq::PATH).await {
        return;
    }
    let mut form = helpers::login_form(store);
    form.show_password = !form.show_password;
    store.set(LoginForm::PATH, form);
}

/// Handle `login/forgot-password`.
pub async fn handle_forgot_password(ctx: &ClinicContext, store: &StateStore) {
    if session_active(ctx, ForgotPasswordReq::PATH).await {
        return;
    }
    let mut form = helpers::login_form(store);
    form.notice = Some(Notice {
        title: "Forgot Password".into(),
        message: format!(
            "Please contact your system administrator to reset your password.\n\n\
             Admin Email: {}\nPhone: {}",
            ctx.config.support_email, ctx.config.support_phone
        ),
    });
    store.set(LoginForm::PATH, form);
}

/// Handle `login/dismiss-notice`.
pub async fn handle_dismiss_notice(store: &StateStore) {
    let mut form = helpers::login_form(store);
    if form.notice.take().is_some() {
        store.set(LoginForm::PATH, form);
    }
}
