//! Console command parsing.

use clinic_auth::Role;
use clinic_patients::{PatientField, PatientId};
use clinic_shell::ModuleId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,

    // Login screen.
    User(String),
    /// `None` asks for the password without echo.
    Password(Option<String>),
    Type(Role),
    ShowPassword,
    Login,
    Forgot,

    // Dashboard.
    Go(ModuleId),
    Search(String),
    Add,
    Edit(PatientId),
    Set(PatientField, String),
    Save,
    Cancel,
    Delete(PatientId),
    Yes,
    No,
    Logout,
}

/// Parse one input line. Blank lines give `Ok(None)`.
pub fn parse(input: &str) -> Result<Option<Command>, String> {
    let line = input.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,

        "user" | "username" => Command::User(required(rest, "user <name>")?.to_string()),
        "password" | "pass" => {
            let raw = raw_argument(input);
            Command::Password((!raw.is_empty()).then(|| raw.to_string()))
        }
        "type" => Command::Type(required(rest, "type admin|employee")?.parse()?),
        "show-password" => Command::ShowPassword,
        "login" => Command::Login,
        "forgot" => Command::Forgot,

        "go" => Command::Go(required(rest, "go <module>")?.parse()?),
        "search" => Command::Search(rest.to_string()),
        "add" => Command::Add,
        "edit" => Command::Edit(required(rest, "edit <id>")?.parse()?),
        "set" => {
            let usage = "set <field> <value>";
            let (field, value) = match required(rest, usage)?.split_once(char::is_whitespace) {
                Some((f, v)) => (f, v.trim()),
                None => (rest, ""),
            };
            Command::Set(field.parse()?, value.to_string())
        }
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(required(rest, "delete <id>")?.parse()?),
        "yes" | "y" => Command::Yes,
        "no" | "n" => Command::No,
        "logout" => Command::Logout,

        other => return Err(format!("unknown command '{}', type 'help'", other)),
    };
    Ok(Some(cmd))
}

/// Everything after the command word and its single separator, untouched.
fn raw_argument(input: &str) -> &str {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(i) => {
            let rest = &input[i..];
            let sep = rest.chars().next().map_or(0, char::len_utf8);
            &rest[sep..]
        }
        None => "",
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(rest)
    }
}

pub const LOGIN_HELP: &str = "\
  user <name>            set the username
  password [text]        set the password (prompts hidden if omitted)
  type admin|employee    choose the account type
  show-password          show or hide the password
  login                  sign in
  forgot                 how to reset a password";

pub const DASHBOARD_HELP: &str = "\
  go <module>            patients, appointments, treatments, billing, staff, reports
  search [text]          filter patients by name (empty clears)
  add                    open the add patient form
  edit <id>              edit a patient, e.g. edit P0001
  delete <id>            delete a patient (asks first)
  logout                 sign out (asks first)";

pub const DIALOG_HELP: &str = "\
  set <field> <value>    name, age, gender, contact, email, address
  save                   save the patient
  cancel                 close without saving";

pub const CONFIRM_HELP: &str = "\
  yes | no               answer the question";

pub const COMMON_HELP: &str = "\
  help                   this list
  quit                   leave the console";
