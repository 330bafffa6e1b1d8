//! App lifecycle handler implementations.

use tracing::info;

use clinic_flux::StateStore;

use crate::handlers::{ClinicContext, helpers};
use crate::state::*;

/// Handle `app/initialize`.
pub async fn handle_initialize(ctx: &ClinicContext, store: &StateStore) {
    if ctx.session().lock().await.take().is_some() {
        info!("initialize dropped an active session");
    }
    show_login(ctx, store);
}

/// Tear down dashboard state and show an empty login form.
pub(crate) fn show_login(ctx: &ClinicContext, store: &StateStore) {
    store.remove(HeaderState::PATH);
    store.remove(NavState::PATH);
    store.remove(PanelState::PATH);
    store.remove(PatientTable::PATH);
    helpers::close_dialogs(store);

    store.set(AuthState::PATH, AuthState::unauthenticated());
    store.set(LoginForm::PATH, LoginForm::new(ctx.default_account_type()));
    store.set(AppRoute::PATH, AppRoute::login());
}
