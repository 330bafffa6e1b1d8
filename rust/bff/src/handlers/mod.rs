//! Handler implementations and Flux wiring.
//!
//! `register_handlers` connects every request path to its handler,
//! downcasting the typed payload on the way in.

pub mod app_handlers;
pub mod auth_handlers;
pub mod dialog_handlers;
pub mod helpers;
pub mod login_handlers;
pub mod patient_handlers;
pub mod shell_handlers;

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use clinic_auth::{Authenticator, Role, User};
use clinic_core::ClinicConfig;
use clinic_flux::{Flux, StateStore};
use clinic_patients::PatientRegistry;
use clinic_shell::Navigator;

use crate::request::*;

/// Everything that exists only while someone is logged in.
///
/// Dropping the session drops its patients; the next login starts
/// from an empty registry.
pub struct Session {
    pub user: User,
    pub navigator: Navigator,
    pub patients: PatientRegistry,
    /// Current search text of the patients table.
    pub query: String,
}

impl Session {
    pub fn new(user: User, clock: fn() -> String) -> Self {
        let navigator = Navigator::new(user.role);
        Self {
            user,
            navigator,
            patients: PatientRegistry::with_clock(clock),
            query: String::new(),
        }
    }
}

/// Backend context shared by all handlers.
pub struct ClinicContext {
    pub authenticator: Arc<dyn Authenticator>,
    pub config: ClinicConfig,
    session: Mutex<Option<Session>>,
    clock: fn() -> String,
}

impl ClinicContext {
    pub fn new(authenticator: Arc<dyn Authenticator>, config: ClinicConfig) -> Self {
        Self {
            authenticator,
            config,
            session: Mutex::new(None),
            clock: clinic_core::today,
        }
    }

    /// Override the registration date source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn session(&self) -> &Mutex<Option<Session>> {
        &self.session
    }

    pub(crate) fn clock(&self) -> fn() -> String {
        self.clock
    }

    /// Account type preselected on a fresh login form.
    ///
    /// Falls back to Admin when the configured value is not a role.
    pub fn default_account_type(&self) -> Role {
        self.config
            .default_account_type
            .parse()
            .unwrap_or_else(|e: String| {
                warn!(error = %e, "bad default_account_type in config, using Admin");
                Role::Admin
            })
    }
}

/// Register one typed handler. A payload of the wrong type is logged and
/// dropped rather than panicking the dispatch.
fn route<R, F, Fut>(flux: &Flux, path: &'static str, ctx: &Arc<ClinicContext>, handler: F)
where
    R: Any + Clone + Send + Sync,
    F: Fn(R, Arc<ClinicContext>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let ctx = Arc::clone(ctx);
    let handler = Arc::new(handler);
    flux.on(path, move |path, payload, store| {
        let ctx = Arc::clone(&ctx);
        let handler = Arc::clone(&handler);
        let req = payload.downcast_ref::<R>().cloned();
        async move {
            match req {
                Some(req) => handler(req, ctx, store).await,
                None => warn!(
                    path = %path,
                    expected = std::any::type_name::<R>(),
                    "request payload has the wrong type"
                ),
            }
        }
    });
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<ClinicContext>) {
    // app/initialize
    route(flux, InitializeReq::PATH, &ctx, |_: InitializeReq, ctx, store| async move {
        app_handlers::handle_initialize(&ctx, &store).await;
    });

    // login/*
    route(flux, LoginUpdateFieldReq::PATH, &ctx, |req: LoginUpdateFieldReq, ctx, store| async move {
        login_handlers::handle_update_field(&req, &ctx, &store).await;
    });
    route(flux, SelectAccountTypeReq::PATH, &ctx, |req: SelectAccountTypeReq, ctx, store| async move {
        login_handlers::handle_select_account_type(&req, &ctx, &store).await;
    });
    route(flux, TogglePasswordReq::PATH, &ctx, |_: TogglePasswordReq, ctx, store| async move {
        login_handlers::handle_toggle_password(&ctx, &store).await;
    });
    route(flux, ForgotPasswordReq::PATH, &ctx, |_: ForgotPasswordReq, ctx, store| async move {
        login_handlers::handle_forgot_password(&ctx, &store).await;
    });
    route(flux, DismissNoticeReq::PATH, &ctx, |_: DismissNoticeReq, _, store| async move {
        login_handlers::handle_dismiss_notice(&store).await;
    });

    // auth/*
    route(flux, LoginReq::PATH, &ctx, |_: LoginReq, ctx, store| async move {
        auth_handlers::handle_login(&ctx, &store).await;
    });
    route(flux, LogoutReq::PATH, &ctx, |_: LogoutReq, ctx, store| async move {
        auth_handlers::handle_logout(&ctx, &store).await;
    });

    // shell/navigate
    route(flux, NavigateReq::PATH, &ctx, |req: NavigateReq, ctx, store| async move {
        shell_handlers::handle_navigate(&req, &ctx, &store).await;
    });

    // patients/*
    route(flux, SearchPatientsReq::PATH, &ctx, |req: SearchPatientsReq, ctx, store| async move {
        patient_handlers::handle_search(&req, &ctx, &store).await;
    });
    route(flux, OpenAddPatientReq::PATH, &ctx, |_: OpenAddPatientReq, ctx, store| async move {
        patient_handlers::handle_open_add(&ctx, &store).await;
    });
    route(flux, OpenEditPatientReq::PATH, &ctx, |req: OpenEditPatientReq, ctx, store| async move {
        patient_handlers::handle_open_edit(&req, &ctx, &store).await;
    });
    route(flux, PatientDialogUpdateReq::PATH, &ctx, |req: PatientDialogUpdateReq, _, store| async move {
        patient_handlers::handle_dialog_update(&req, &store).await;
    });
    route(flux, SavePatientReq::PATH, &ctx, |_: SavePatientReq, ctx, store| async move {
        patient_handlers::handle_save(&ctx, &store).await;
    });
    route(flux, CancelPatientDialogReq::PATH, &ctx, |_: CancelPatientDialogReq, _, store| async move {
        patient_handlers::handle_cancel(&store).await;
    });
    route(flux, RequestDeletePatientReq::PATH, &ctx, |req: RequestDeletePatientReq, ctx, store| async move {
        patient_handlers::handle_request_delete(&req, &ctx, &store).await;
    });

    // dialog/answer
    route(flux, AnswerConfirmReq::PATH, &ctx, |req: AnswerConfirmReq, ctx, store| async move {
        dialog_handlers::handle_answer(&req, &ctx, &store).await;
    });
}
