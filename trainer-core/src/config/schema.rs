//! Configuration schema types
//!
//! Static data consumed once at startup: who the learner is, what the
//! simulated audit metadata looks like, the permission table and the quizzes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::policy::{PermissionTable, RoleGrant};
use crate::scoring::{DEFAULT_LEARNER, Quiz, QuizBank};

/// Address stamped on simulated audit entries by default
pub const DEFAULT_SIMULATED_IP: &str = "192.168.1.100";

/// Complete trainer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    #[serde(default)]
    pub learner: LearnerConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    /// Permission table; empty means the built-in hospital roles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleGrant>,
    /// Quiz definitions; empty means the built-in catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quizzes: Vec<Quiz>,
}

impl TrainerConfig {
    /// Build the permission table this configuration describes
    pub fn permission_table(&self) -> Result<PermissionTable, ConfigError> {
        if self.roles.is_empty() {
            Ok(PermissionTable::default())
        } else {
            PermissionTable::new(self.roles.iter().cloned())
        }
    }

    /// Build the quiz bank this configuration describes
    pub fn quiz_bank(&self) -> Result<QuizBank, ConfigError> {
        if self.quizzes.is_empty() {
            Ok(QuizBank::default())
        } else {
            QuizBank::new(self.quizzes.iter().cloned())
        }
    }
}

/// Who quiz events are attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub actor: String,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            actor: DEFAULT_LEARNER.to_string(),
        }
    }
}

/// Simulated metadata for audit entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_ip: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            simulated_ip: Some(DEFAULT_SIMULATED_IP.to_string()),
        }
    }
}
