use serde::{Deserialize, Serialize};

use crate::module::ModuleId;

/// Static content of a module panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub module: ModuleId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Placeholder description. `None` for patients, whose body is the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

const ADMIN_BADGE: &str = "🔒 Admin Only";

pub fn panel_for(module: ModuleId) -> Panel {
    let (title, info) = match module {
        ModuleId::Patients => ("Patients Management", None),
        ModuleId::Appointments => (
            "Appointments Management",
            Some("Appointments module - Calendar view and appointment management"),
        ),
        ModuleId::Treatments => (
            "Treatments Management",
            Some("Treatments module - Patient treatment records and procedures"),
        ),
        ModuleId::Billing => (
            "Billing & Invoicing",
            Some("Billing module - Invoice generation and payment tracking"),
        ),
        ModuleId::Staff => (
            "Staff Management",
            Some("Staff module - Employee management and scheduling"),
        ),
        ModuleId::Reports => (
            "Reports & Analytics",
            Some("Reports module - Clinic performance and analytics"),
        ),
    };

    Panel {
        module,
        title: title.to_string(),
        badge: module.admin_only().then(|| ADMIN_BADGE.to_string()),
        info: info.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_panels_carry_badge() {
        assert_eq!(panel_for(ModuleId::Staff).badge.as_deref(), Some("🔒 Admin Only"));
        assert_eq!(panel_for(ModuleId::Reports).badge.as_deref(), Some("🔒 Admin Only"));
        assert!(panel_for(ModuleId::Billing).badge.is_none());
    }

    #[test]
    fn placeholder_texts() {
        let p = panel_for(ModuleId::Billing);
        assert_eq!(p.title, "Billing & Invoicing");
        assert_eq!(
            p.info.as_deref(),
            Some("Billing module - Invoice generation and payment tracking")
        );
    }

    #[test]
    fn patients_panel_has_no_placeholder() {
        let p = panel_for(ModuleId::Patients);
        assert_eq!(p.title, "Patients Management");
        assert!(p.info.is_none());
    }
}
