//! Text rendering of the flux state.
//!
//! Every function reads state paths and returns a `String`; nothing here
//! mutates state.

use std::fmt::Write;

use comfy_table::{
    Attribute, Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS,
    presets::UTF8_FULL,
};

use clinic_bff::state::*;
use clinic_flux::Flux;
use clinic_patients::PatientField;

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn header_cells(headers: &[&str]) -> Vec<Cell> {
    headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect()
}

pub fn login_screen(flux: &Flux, clinic_name: &str) -> String {
    let mut out = String::new();
    let Some(form) = flux.get_cloned::<LoginForm>(LoginForm::PATH) else {
        return out;
    };

    let _ = writeln!(out, "🦷 WELCOME BACK");
    let _ = writeln!(out, "Sign in to {}", clinic_name);

    let mut t = table();
    t.set_header(header_cells(&["Field", "Value"]));
    t.add_row(vec![
        Cell::new("Account Type"),
        Cell::new(form.account_type.as_str()),
    ]);
    t.add_row(vec![
        field_label("Username", form.focus == LoginField::Username),
        Cell::new(&form.username),
    ]);
    t.add_row(vec![
        field_label("Password", form.focus == LoginField::Password),
        Cell::new(form.password_display()),
    ]);
    let _ = writeln!(out, "{}", t);

    if let Some(error) = &form.error {
        let _ = writeln!(out, "❌ {}", error);
    }
    if let Some(notice) = &form.notice {
        let _ = writeln!(out, "\n[{}]\n{}", notice.title, notice.message);
    }
    out
}

fn field_label(label: &str, focused: bool) -> Cell {
    if focused {
        Cell::new(format!("› {}", label)).add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}

pub fn dashboard(flux: &Flux) -> String {
    let mut out = String::new();

    if let Some(header) = flux.get_cloned::<HeaderState>(HeaderState::PATH) {
        let _ = writeln!(
            out,
            "{}    👤 {} ({})",
            header.title, header.user_name, header.role
        );
    }

    if let Some(nav) = flux.get_cloned::<NavState>(NavState::PATH) {
        let items: Vec<String> = nav
            .items
            .iter()
            .map(|i| {
                if i.active {
                    format!("[{} {}]", i.icon, i.label)
                } else {
                    format!(" {} {} ", i.icon, i.label)
                }
            })
            .collect();
        let _ = writeln!(out, "Menu: {}", items.join(" "));
    }

    if let Some(panel) = flux.get_cloned::<PanelState>(PanelState::PATH) {
        let _ = writeln!(out, "\n{}", panel.title);
        if let Some(badge) = &panel.badge {
            let _ = writeln!(out, "{}", badge);
        }
        match &panel.info {
            Some(info) => {
                let _ = writeln!(out, "{}", info);
            }
            None => out.push_str(&patients_table(flux)),
        }
    }
    out
}

pub fn patients_table(flux: &Flux) -> String {
    let Some(data) = flux.get_cloned::<PatientTable>(PatientTable::PATH) else {
        return String::new();
    };

    let mut out = String::new();
    if !data.query.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", data.query);
    }
    if data.rows.is_empty() {
        let msg = if data.total == 0 {
            "No patients registered yet. Type 'add' to register one."
        } else {
            "No patients match the search."
        };
        let _ = writeln!(out, "{}", msg);
        return out;
    }

    let mut t = table();
    t.set_header(header_cells(&PatientTable::COLUMNS));
    for row in &data.rows {
        t.add_row(vec![
            row.id.to_string(),
            row.name.clone(),
            row.age.to_string(),
            row.gender.clone(),
            row.contact.clone(),
            row.email.clone(),
            row.registered_date.clone(),
        ]);
    }
    let _ = writeln!(out, "{}", t);
    let _ = writeln!(out, "{} of {} patients", data.rows.len(), data.total);
    out
}

pub fn patient_dialog(dialog: &PatientDialog) -> String {
    let mut t = table();
    t.set_header(header_cells(&["Field", "Value"]));
    for field in PatientField::ALL {
        let value = dialog.form.get(field);
        let cell = if value.is_empty() {
            Cell::new(field.placeholder()).fg(Color::DarkGrey)
        } else {
            Cell::new(value)
        };
        t.add_row(vec![Cell::new(field.as_str()), cell]);
    }
    format!("\n{}\n{}\n", dialog.title, t)
}

pub fn confirm(dialog: &ConfirmDialog) -> String {
    format!("\n{}: {} [yes/no]\n", dialog.title, dialog.message)
}

/// Whole screen for the current route, including any open dialog.
pub fn screen(flux: &Flux, clinic_name: &str) -> String {
    let route = flux
        .get_cloned::<AppRoute>(AppRoute::PATH)
        .unwrap_or_else(AppRoute::login);
    let mut out = if route.is_dashboard() {
        dashboard(flux)
    } else {
        login_screen(flux, clinic_name)
    };

    if let Some(dialog) = flux
        .get_cloned::<Option<PatientDialog>>(PatientDialog::PATH)
        .flatten()
    {
        out.push_str(&patient_dialog(&dialog));
    }
    if let Some(dialog) = flux
        .get_cloned::<Option<ConfirmDialog>>(ConfirmDialog::PATH)
        .flatten()
    {
        out.push_str(&confirm(&dialog));
    }
    out
}
