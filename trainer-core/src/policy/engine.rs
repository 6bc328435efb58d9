//! Permission evaluation with audit recording

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::{Action, PermissionTable, Role};
use crate::audit::{AuditEntry, AuditLog, codes};

const PERMITTED: &str = "Action permitted";
const DENIED: &str = "Access denied";
const ROLE_SWITCHED: &str = "User switched role";

/// Outcome of a single permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub role: Role,
    pub action: Action,
}

impl Decision {
    /// Event code this decision is recorded under
    pub fn audit_code(&self) -> String {
        if self.allowed {
            self.action.as_str().to_string()
        } else {
            codes::denied(self.action.as_str())
        }
    }
}

/// Evaluates role/action pairs against a fixed [`PermissionTable`].
///
/// Holds no current role: every call carries the role it is asked about,
/// and every call leaves one entry in the shared audit log.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    table: Arc<PermissionTable>,
    audit: Arc<AuditLog>,
}

impl PolicyEngine {
    pub fn new(table: Arc<PermissionTable>, audit: Arc<AuditLog>) -> Self {
        Self { table, audit }
    }

    /// Decide whether `role` may perform `action`. Unknown roles and
    /// actions are denied.
    pub fn decide(&self, role: &str, action: &str) -> Decision {
        let allowed = self.table.allows(role, action);
        let decision = Decision {
            allowed,
            role: Role::new(role),
            action: Action::new(action),
        };

        let description = if allowed { PERMITTED } else { DENIED };
        self.audit.record(role, decision.audit_code(), description);

        debug!(role, action, allowed, "permission evaluated");
        decision
    }

    /// Record that the front end switched to `role`
    pub fn record_role_switch(&self, role: &str) -> AuditEntry {
        debug!(role, "role switched");
        self.audit.record(role, codes::ROLE_SWITCH, ROLE_SWITCHED)
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RoleGrant;

    fn engine() -> (PolicyEngine, Arc<AuditLog>) {
        let audit = Arc::new(AuditLog::new());
        let engine = PolicyEngine::new(Arc::new(PermissionTable::default()), audit.clone());
        (engine, audit)
    }

    #[test]
    fn test_allowed_action_is_recorded() {
        let (engine, audit) = engine();
        let decision = engine.decide("doctor", "prescribe");

        assert!(decision.allowed);
        assert_eq!(decision.role.as_str(), "doctor");
        assert_eq!(decision.action.as_str(), "prescribe");

        let entry = &audit.recent(1)[0];
        assert_eq!(entry.actor, "doctor");
        assert_eq!(entry.action, "prescribe");
        assert_eq!(entry.description, "Action permitted");
    }

    #[test]
    fn test_denied_action_is_recorded() {
        let (engine, audit) = engine();
        let decision = engine.decide("nurse", "prescribe");

        assert!(!decision.allowed);
        assert_eq!(decision.audit_code(), "prescribe_DENIED");

        let entry = &audit.recent(1)[0];
        assert_eq!(entry.actor, "nurse");
        assert_eq!(entry.action, "prescribe_DENIED");
        assert_eq!(entry.description, "Access denied");
    }

    #[test]
    fn test_unknown_role_and_action_fail_closed() {
        let (engine, audit) = engine();

        assert!(!engine.decide("intern", "viewRecord").allowed);
        assert!(!engine.decide("doctor", "launchMissiles").allowed);
        assert_eq!(audit.len(), 2);
        assert_eq!(audit.recent(1)[0].action, "launchMissiles_DENIED");
    }

    #[test]
    fn test_decisions_are_independent() {
        let (engine, _) = engine();
        assert!(engine.decide("admin", "deleteRecord").allowed);
        assert!(!engine.decide("patient", "deleteRecord").allowed);
        assert!(engine.decide("admin", "deleteRecord").allowed);
    }

    #[test]
    fn test_single_grant_table() {
        let audit = Arc::new(AuditLog::new());
        let table = PermissionTable::new(vec![RoleGrant::new("patient", ["viewRecord"])]).unwrap();
        let engine = PolicyEngine::new(Arc::new(table), audit);

        assert!(engine.decide("patient", "viewRecord").allowed);
        assert!(!engine.decide("patient", "editRecord").allowed);
    }

    #[test]
    fn test_role_switch_is_audited() {
        let (engine, audit) = engine();
        let entry = engine.record_role_switch("admin");

        assert_eq!(entry.actor, "admin");
        assert_eq!(entry.action, "ROLE_SWITCH");
        assert_eq!(entry.description, "User switched role");
        assert_eq!(audit.len(), 1);
    }
}
