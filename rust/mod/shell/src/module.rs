use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A selectable content area of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleId {
    Patients,
    Appointments,
    Treatments,
    Billing,
    Staff,
    Reports,
}

impl ModuleId {
    /// Sidebar order.
    pub const ALL: [ModuleId; 6] = [
        ModuleId::Patients,
        ModuleId::Appointments,
        ModuleId::Treatments,
        ModuleId::Billing,
        ModuleId::Staff,
        ModuleId::Reports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Patients => "patients",
            ModuleId::Appointments => "appointments",
            ModuleId::Treatments => "treatments",
            ModuleId::Billing => "billing",
            ModuleId::Staff => "staff",
            ModuleId::Reports => "reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleId::Patients => "Patients",
            ModuleId::Appointments => "Appointments",
            ModuleId::Treatments => "Treatments",
            ModuleId::Billing => "Billing",
            ModuleId::Staff => "Staff",
            ModuleId::Reports => "Reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModuleId::Patients => "👥",
            ModuleId::Appointments => "📅",
            ModuleId::Treatments => "💊",
            ModuleId::Billing => "💰",
            ModuleId::Staff => "👨‍⚕️",
            ModuleId::Reports => "📊",
        }
    }

    /// Only Admin sessions may see or select this module.
    pub fn admin_only(&self) -> bool {
        matches!(self, ModuleId::Staff | ModuleId::Reports)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ModuleId::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| format!("unknown module '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Billing".parse::<ModuleId>(), Ok(ModuleId::Billing));
        assert_eq!(" REPORTS ".parse::<ModuleId>(), Ok(ModuleId::Reports));
        assert!("inventory".parse::<ModuleId>().is_err());
    }

    #[test]
    fn only_staff_and_reports_are_admin_only() {
        let gated: Vec<_> = ModuleId::ALL.into_iter().filter(|m| m.admin_only()).collect();
        assert_eq!(gated, vec![ModuleId::Staff, ModuleId::Reports]);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ModuleId::Appointments).unwrap();
        assert_eq!(json, "\"appointments\"");
    }
}
