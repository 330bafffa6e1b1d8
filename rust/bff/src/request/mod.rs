//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH` const. The
//! renderer emits it at that path; `register_handlers` wires the handler.

pub mod app;
pub mod auth;
pub mod dialog;
pub mod login;
pub mod patients;
pub mod shell;

pub use app::InitializeReq;
pub use auth::{LoginReq, LogoutReq};
pub use dialog::AnswerConfirmReq;
pub use login::{
    DismissNoticeReq, ForgotPasswordReq, LoginUpdateFieldReq, SelectAccountTypeReq,
    TogglePasswordReq,
};
pub use patients::{
    CancelPatientDialogReq, OpenAddPatientReq, OpenEditPatientReq, PatientDialogUpdateReq,
    RequestDeletePatientReq, SavePatientReq, SearchPatientsReq,
};
pub use shell::NavigateReq;
