use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use clinic_auth::Role;
use clinic_core::ClinicError;

use crate::module::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("module '{module}' is not available to {role} accounts")]
    NotPermitted { module: ModuleId, role: Role },
}

impl From<NavError> for ClinicError {
    fn from(e: NavError) -> Self {
        ClinicError::PermissionDenied(e.to_string())
    }
}

/// One sidebar entry as the renderer shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: ModuleId,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

/// Current module selection for one session.
///
/// Starts on patients. The role fixes which modules are reachable; an
/// unreachable selection is refused and the current module stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    role: Role,
    current: ModuleId,
}

impl Navigator {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            current: ModuleId::Patients,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current(&self) -> ModuleId {
        self.current
    }

    pub fn is_reachable(&self, module: ModuleId) -> bool {
        !module.admin_only() || self.role.is_admin()
    }

    /// Modules this role can see, in sidebar order.
    pub fn modules(&self) -> impl Iterator<Item = ModuleId> + '_ {
        ModuleId::ALL.into_iter().filter(|m| self.is_reachable(*m))
    }

    pub fn items(&self) -> Vec<NavItem> {
        self.modules()
            .map(|m| NavItem {
                id: m,
                label: m.label().to_string(),
                icon: m.icon().to_string(),
                active: m == self.current,
            })
            .collect()
    }

    pub fn select(&mut self, module: ModuleId) -> Result<ModuleId, NavError> {
        if !self.is_reachable(module) {
            warn!(module = %module, role = %self.role, "navigation refused");
            return Err(NavError::NotPermitted {
                module,
                role: self.role,
            });
        }
        debug!(from = %self.current, to = %module, "navigate");
        self.current = module;
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_sees_four_modules() {
        let nav = Navigator::new(Role::Employee);
        let ids: Vec<_> = nav.items().into_iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![
                ModuleId::Patients,
                ModuleId::Appointments,
                ModuleId::Treatments,
                ModuleId::Billing,
            ]
        );
    }

    #[test]
    fn admin_sees_all_six() {
        let nav = Navigator::new(Role::Admin);
        assert_eq!(nav.items().len(), 6);
        assert!(nav.is_reachable(ModuleId::Staff));
        assert!(nav.is_reachable(ModuleId::Reports));
    }

    #[test]
    fn starts_on_patients() {
        let nav = Navigator::new(Role::Employee);
        assert_eq!(nav.current(), ModuleId::Patients);
        let active: Vec<_> = nav.items().into_iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, ModuleId::Patients);
    }

    #[test]
    fn select_moves_active_marker() {
        let mut nav = Navigator::new(Role::Admin);
        assert_eq!(nav.select(ModuleId::Reports), Ok(ModuleId::Reports));
        assert_eq!(nav.current(), ModuleId::Reports);
        let active = nav.items().into_iter().find(|i| i.active).unwrap();
        assert_eq!(active.label, "Reports");
    }

    #[test]
    fn employee_cannot_select_admin_modules() {
        let mut nav = Navigator::new(Role::Employee);
        nav.select(ModuleId::Billing).unwrap();

        for gated in [ModuleId::Staff, ModuleId::Reports] {
            let err = nav.select(gated).unwrap_err();
            assert_eq!(
                err,
                NavError::NotPermitted {
                    module: gated,
                    role: Role::Employee
                }
            );
            assert_eq!(nav.current(), ModuleId::Billing);
        }
    }

    #[test]
    fn nav_error_is_permission_denied() {
        let err: ClinicError = NavError::NotPermitted {
            module: ModuleId::Staff,
            role: Role::Employee,
        }
        .into();
        assert!(matches!(err, ClinicError::PermissionDenied(_)));
        assert_eq!(err.to_string(), "module 'staff' is not available to Employee accounts");
    }
}
