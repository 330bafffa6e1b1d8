//! Interactive terminal front end.
//!
//! The console is a renderer: it turns typed commands into flux requests
//! and prints the state those requests leave behind.

pub mod command;
pub mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use clinic_auth::{Authenticator, StaticAccounts};
use clinic_bff::request::*;
use clinic_bff::state::*;
use clinic_bff::{ClinicContext, register_handlers};
use clinic_core::ClinicConfig;
use clinic_flux::Flux;

use command::Command;

/// What the user is currently looking at. Decides which commands apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    PatientDialog,
    Confirm,
}

/// Outcome of one command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// State changed; redraw.
    Redraw,
    /// Print this line, no redraw.
    Message(String),
    Quit,
}

pub struct Console {
    flux: Flux,
    config: ClinicConfig,
}

impl Console {
    pub async fn new(config: ClinicConfig) -> Self {
        Self::with_authenticator(config, Arc::new(StaticAccounts::builtin())).await
    }

    pub async fn with_authenticator(
        config: ClinicConfig,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let flux = Flux::new();
        register_handlers(&flux, Arc::new(ClinicContext::new(authenticator, config.clone())));
        flux.emit(InitializeReq::PATH, InitializeReq).await;
        Self { flux, config }
    }

    pub fn screen(&self) -> Screen {
        let confirm = self
            .flux
            .get_cloned::<Option<ConfirmDialog>>(ConfirmDialog::PATH)
            .flatten();
        let dialog = self
            .flux
            .get_cloned::<Option<PatientDialog>>(PatientDialog::PATH)
            .flatten();

        if confirm.is_some() {
            Screen::Confirm
        } else if dialog.is_some() {
            Screen::PatientDialog
        } else if self
            .flux
            .get_cloned::<AppRoute>(AppRoute::PATH)
            .is_some_and(|r| r.is_dashboard())
        {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }

    pub fn render(&self) -> String {
        render::screen(&self.flux, &self.config.clinic_name)
    }

    pub fn help(&self) -> String {
        let specific = match self.screen() {
            Screen::Login => command::LOGIN_HELP,
            Screen::Dashboard => command::DASHBOARD_HELP,
            Screen::PatientDialog => command::DIALOG_HELP,
            Screen::Confirm => command::CONFIRM_HELP,
        };
        format!("{}\n{}", specific, command::COMMON_HELP)
    }

    /// Run one command against the current screen.
    pub async fn execute(&self, cmd: Command) -> Outcome {
        let screen = self.screen();
        if !allowed(&cmd, screen) {
            return Outcome::Message(format!(
                "'{}' is not available here, type 'help'",
                name(&cmd)
            ));
        }
        debug!(command = name(&cmd), ?screen, "execute");

        let f = &self.flux;
        match cmd {
            Command::Help => return Outcome::Message(self.help()),
            Command::Quit => return Outcome::Quit,

            Command::User(value) => {
                f.emit(
                    LoginUpdateFieldReq::PATH,
                    LoginUpdateFieldReq { field: LoginField::Username, value },
                )
                .await
            }
            Command::Password(value) => {
                let value = value.unwrap_or_default();
                f.emit(
                    LoginUpdateFieldReq::PATH,
                    LoginUpdateFieldReq { field: LoginField::Password, value },
                )
                .await
            }
            Command::Type(account_type) => {
                f.emit(SelectAccountTypeReq::PATH, SelectAccountTypeReq { account_type })
                    .await
            }
            Command::ShowPassword => f.emit(TogglePasswordReq::PATH, TogglePasswordReq).await,
            Command::Login => f.emit(LoginReq::PATH, LoginReq).await,
            Command::Forgot => f.emit(ForgotPasswordReq::PATH, ForgotPasswordReq).await,

            Command::Go(module) => {
                f.emit(NavigateReq::PATH, NavigateReq { module }).await;
                let current = f.get_cloned::<NavState>(NavState::PATH).map(|n| n.current);
                if current != Some(module) {
                    return Outcome::Message(format!(
                        "{} is only available to Admin accounts",
                        module.label()
                    ));
                }
            }
            Command::Search(query) => {
                f.emit(SearchPatientsReq::PATH, SearchPatientsReq { query }).await
            }
            Command::Add => f.emit(OpenAddPatientReq::PATH, OpenAddPatientReq).await,
            Command::Edit(id) => {
                f.emit(OpenEditPatientReq::PATH, OpenEditPatientReq { id }).await;
                if self.screen() != Screen::PatientDialog {
                    return Outcome::Message(format!("no patient {}", id));
                }
            }
            Command::Set(field, value) => {
                f.emit(
                    PatientDialogUpdateReq::PATH,
                    PatientDialogUpdateReq { field, value },
                )
                .await
            }
            Command::Save => f.emit(SavePatientReq::PATH, SavePatientReq).await,
            Command::Cancel => f.emit(CancelPatientDialogReq::PATH, CancelPatientDialogReq).await,
            Command::Delete(id) => {
                f.emit(RequestDeletePatientReq::PATH, RequestDeletePatientReq { id })
                    .await;
                if self.screen() != Screen::Confirm {
                    return Outcome::Message(format!("no patient {}", id));
                }
            }
            Command::Yes => {
                f.emit(AnswerConfirmReq::PATH, AnswerConfirmReq { accepted: true })
                    .await
            }
            Command::No => {
                f.emit(AnswerConfirmReq::PATH, AnswerConfirmReq { accepted: false })
                    .await
            }
            Command::Logout => f.emit(LogoutReq::PATH, LogoutReq).await,
        }
        Outcome::Redraw
    }

    /// Close an informational notice once it has been shown.
    pub async fn acknowledge_notice(&self) {
        let shown = self
            .flux
            .get_cloned::<LoginForm>(LoginForm::PATH)
            .is_some_and(|f| f.notice.is_some());
        if shown {
            self.flux.emit(DismissNoticeReq::PATH, DismissNoticeReq).await;
        }
    }

    /// Read-eval-print loop until `quit` or end of input.
    pub async fn run(&self, history: Option<PathBuf>) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        if let Some(path) = &history {
            if rl.load_history(path).is_err() {
                debug!(path = %path.display(), "no console history yet");
            }
        }

        println!("{}", self.render());
        println!("Type 'help' for commands.");
        self.acknowledge_notice().await;

        loop {
            let prompt = match self.screen() {
                Screen::Login => "login> ",
                Screen::Dashboard => "clinic> ",
                Screen::PatientDialog => "patient> ",
                Screen::Confirm => "[yes/no]> ",
            };
            let line = match rl.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let cmd = match command::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            };
            remember(&mut rl, &line, &cmd);

            let cmd = match cmd {
                Command::Password(None) if self.screen() == Screen::Login => {
                    Command::Password(Some(rpassword::prompt_password("Password: ")?))
                }
                other => other,
            };

            match self.execute(cmd).await {
                Outcome::Quit => break,
                Outcome::Message(msg) => println!("{}", msg),
                Outcome::Redraw => {
                    println!("{}", self.render());
                    self.acknowledge_notice().await;
                }
            }
        }

        if let Some(path) = &history {
            if let Err(e) = rl.save_history(path) {
                warn!(path = %path.display(), error = %e, "could not save console history");
            }
        }
        println!("Goodbye.");
        Ok(())
    }
}

/// Add a line to the history. Typed passwords stay out of it.
fn remember(rl: &mut DefaultEditor, line: &str, cmd: &Command) {
    if matches!(cmd, Command::Password(_)) {
        return;
    }
    if let Err(e) = rl.add_history_entry(line) {
        debug!(error = %e, "history entry not recorded");
    }
}

fn allowed(cmd: &Command, screen: Screen) -> bool {
    use Command::*;
    match cmd {
        Help | Quit => true,
        User(_) | Password(_) | Type(_) | ShowPassword | Login | Forgot => screen == Screen::Login,
        Go(_) | Search(_) | Add | Edit(_) | Delete(_) | Logout => screen == Screen::Dashboard,
        Set(..) | Save | Cancel => screen == Screen::PatientDialog,
        Yes | No => screen == Screen::Confirm,
    }
}

fn name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Help => "help",
        Command::Quit => "quit",
        Command::User(_) => "user",
        Command::Password(_) => "password",
        Command::Type(_) => "type",
        Command::ShowPassword => "show-password",
        Command::Login => "login",
        Command::Forgot => "forgot",
        Command::Go(_) => "go",
        Command::Search(_) => "search",
        Command::Add => "add",
        Command::Edit(_) => "edit",
        Command::Set(..) => "set",
        Command::Save => "save",
        Command::Cancel => "cancel",
        Command::Delete(_) => "delete",
        Command::Yes => "yes",
        Command::No => "no",
        Command::Logout => "logout",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::{History, SearchDirection};
    use clinic_patients::{PatientField, PatientId};
    use clinic_shell::ModuleId;

    async fn console() -> Console {
        Console::new(ClinicConfig::default()).await
    }

    async fn run(c: &Console, lines: &[&str]) -> Vec<Outcome> {
        let mut out = Vec::new();
        for line in lines {
            let cmd = command::parse(line).unwrap().unwrap();
            out.push(c.execute(cmd).await);
        }
        out
    }

    async fn logged_in_admin() -> Console {
        let c = console().await;
        run(&c, &["user admin", "password admin123", "type admin", "login"]).await;
        assert_eq!(c.screen(), Screen::Dashboard);
        c
    }

    #[tokio::test]
    async fn starts_on_login() {
        let c = console().await;
        assert_eq!(c.screen(), Screen::Login);
        assert!(c.render().contains("WELCOME BACK"));
        assert!(c.help().contains("show-password"));
    }

    #[tokio::test]
    async fn dashboard_commands_rejected_on_login() {
        let c = console().await;
        let out = c.execute(Command::Add).await;
        assert_eq!(out, Outcome::Message("'add' is not available here, type 'help'".into()));
    }

    #[tokio::test]
    async fn full_patient_round() {
        let c = logged_in_admin().await;
        run(
            &c,
            &["add", "set name Ana Lima", "set age 34", "set email ana@example.com", "save"],
        )
        .await;
        assert_eq!(c.screen(), Screen::Dashboard);
        let screen = c.render();
        assert!(screen.contains("P0001"));
        assert!(screen.contains("Ana Lima"));

        run(&c, &["delete P0001"]).await;
        assert_eq!(c.screen(), Screen::Confirm);
        assert!(c.render().contains("Are you sure you want to delete patient 'Ana Lima'?"));
        run(&c, &["yes"]).await;
        assert!(c.render().contains("No patients registered yet"));
    }

    #[tokio::test]
    async fn dialog_only_accepts_dialog_commands() {
        let c = logged_in_admin().await;
        run(&c, &["add"]).await;
        assert_eq!(c.screen(), Screen::PatientDialog);

        let out = c.execute(Command::Logout).await;
        assert!(matches!(out, Outcome::Message(_)));

        let out = c
            .execute(Command::Set(PatientField::Name, "Bo".into()))
            .await;
        assert_eq!(out, Outcome::Redraw);
        run(&c, &["cancel"]).await;
        assert_eq!(c.screen(), Screen::Dashboard);
    }

    #[tokio::test]
    async fn unknown_ids_report_a_message() {
        let c = logged_in_admin().await;
        let out = c.execute(Command::Edit(PatientId::from_seq(5))).await;
        assert_eq!(out, Outcome::Message("no patient P0005".into()));
        let out = c.execute(Command::Delete(PatientId::from_seq(5))).await;
        assert_eq!(out, Outcome::Message("no patient P0005".into()));
    }

    #[tokio::test]
    async fn employee_go_staff_is_refused() {
        let c = console().await;
        run(&c, &["user employee", "password emp123", "type employee", "login"]).await;

        let out = c.execute(Command::Go(ModuleId::Staff)).await;
        assert_eq!(out, Outcome::Message("Staff is only available to Admin accounts".into()));
        assert_eq!(c.execute(Command::Go(ModuleId::Billing)).await, Outcome::Redraw);
        assert!(c.render().contains("Billing & Invoicing"));
    }

    #[tokio::test]
    async fn forgot_notice_shows_once() {
        let c = console().await;
        run(&c, &["forgot"]).await;
        assert!(c.render().contains("admin@smileydental.com"));
        c.acknowledge_notice().await;
        assert!(!c.render().contains("admin@smileydental.com"));
    }

    #[tokio::test]
    async fn logout_after_yes() {
        let c = logged_in_admin().await;
        run(&c, &["logout"]).await;
        assert_eq!(c.screen(), Screen::Confirm);
        run(&c, &["no"]).await;
        assert_eq!(c.screen(), Screen::Dashboard);
        run(&c, &["logout", "yes"]).await;
        assert_eq!(c.screen(), Screen::Login);
    }

    #[test]
    fn history_skips_passwords() {
        let mut rl = DefaultEditor::new().unwrap();
        for line in ["user admin", "password admin123", "login"] {
            let cmd = command::parse(line).unwrap().unwrap();
            remember(&mut rl, line, &cmd);
        }
        let kept: Vec<String> = (0..rl.history().len())
            .filter_map(|i| rl.history().get(i, SearchDirection::Forward).ok().flatten())
            .map(|r| r.entry.into_owned())
            .collect();
        assert_eq!(kept, vec!["user admin", "login"]);
    }

    #[tokio::test]
    async fn quit_anywhere() {
        let c = logged_in_admin().await;
        assert_eq!(c.execute(Command::Quit).await, Outcome::Quit);
    }
}
