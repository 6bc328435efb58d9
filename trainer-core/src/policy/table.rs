//! Role and action types and the static permission table

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

static NO_PERMISSIONS: BTreeSet<Action> = BTreeSet::new();

/// Named category of principal, e.g. `nurse`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque operation identifier, e.g. `editRecord`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form of a camelCase identifier: `viewRecord` -> `View Record`
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 4);
        for (i, c) in self.0.chars().enumerate() {
            if i == 0 {
                out.extend(c.to_uppercase());
            } else if c.is_uppercase() {
                out.push(' ');
                out.push(c);
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl Borrow<str> for Action {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the permission table as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl RoleGrant {
    pub fn new<I, S>(name: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }
}

/// The deck's hospital roles, in the order the role picker shows them
pub fn default_grants() -> Vec<RoleGrant> {
    vec![
        RoleGrant::new("patient", ["viewRecord"]),
        RoleGrant::new("nurse", ["viewRecord", "editRecord"]),
        RoleGrant::new("doctor", ["viewRecord", "editRecord", "prescribe"]),
        RoleGrant::new("admin", ["viewAudit", "deleteRecord"]),
    ]
}

/// Immutable role -> allowed actions mapping.
///
/// Roles keep their declaration order. A role that is not in the table has
/// no permissions at all.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    roles: Vec<Role>,
    actions: Vec<Action>,
    grants: HashMap<Role, BTreeSet<Action>>,
}

impl PermissionTable {
    /// Build a table, rejecting a role declared twice
    pub fn new(grants: impl IntoIterator<Item = RoleGrant>) -> Result<Self, ConfigError> {
        let grants: Vec<RoleGrant> = grants.into_iter().collect();
        let mut seen = BTreeSet::new();
        for grant in &grants {
            if !seen.insert(grant.name.as_str()) {
                return Err(ConfigError::DuplicateRole(grant.name.clone()));
            }
        }
        Ok(Self::assemble(grants))
    }

    fn assemble(grants: Vec<RoleGrant>) -> Self {
        let mut roles = Vec::with_capacity(grants.len());
        let mut actions: Vec<Action> = Vec::new();
        let mut map = HashMap::with_capacity(grants.len());

        for grant in grants {
            let role = Role::new(grant.name);
            let set: BTreeSet<Action> =
                grant.actions.iter().map(|a| Action::new(a.as_str())).collect();
            for action in &grant.actions {
                if !actions.iter().any(|known| known.as_str() == action) {
                    actions.push(Action::new(action.as_str()));
                }
            }
            roles.push(role.clone());
            map.insert(role, set);
        }

        Self {
            roles,
            actions,
            grants: map,
        }
    }

    /// Allowed actions for `role`; empty for unknown roles
    pub fn permissions(&self, role: &str) -> &BTreeSet<Action> {
        self.grants.get(role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Check whether `role` may perform `action`
    pub fn allows(&self, role: &str, action: &str) -> bool {
        self.permissions(role).contains(action)
    }

    /// Check whether the role is declared at all
    pub fn contains_role(&self, role: &str) -> bool {
        self.grants.contains_key(role)
    }

    /// Declared roles, in declaration order
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Every action granted to some role, in first-seen order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::assemble(default_grants())
    }
}
