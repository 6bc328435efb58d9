use serde::Deserialize;
use trainer_core::config::{AuditConfig, LearnerConfig, TrainerConfig};
use trainer_core::policy::RoleGrant;
use trainer_core::scoring::Quiz;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTrainerConfig {
    #[serde(default)]
    pub learner: RawLearnerConfig,

    #[serde(default)]
    pub audit: RawAuditConfig,

    /// Replaces the whole permission table when set
    pub roles: Option<Vec<RoleGrant>>,

    /// Replaces the whole quiz catalog when set
    pub quizzes: Option<Vec<Quiz>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLearnerConfig {
    /// Actor name recorded for quiz events
    pub actor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAuditConfig {
    /// Simulated client address stamped on audit entries
    pub simulated_ip: Option<String>,
}

impl RawTrainerConfig {
    /// Apply defaults for everything left unset
    pub fn finalize(self) -> TrainerConfig {
        let learner = LearnerConfig::default();
        let audit = AuditConfig::default();
        TrainerConfig {
            learner: LearnerConfig {
                actor: self.learner.actor.unwrap_or(learner.actor),
            },
            audit: AuditConfig {
                simulated_ip: self.audit.simulated_ip.or(audit.simulated_ip),
            },
            roles: self.roles.unwrap_or_default(),
            quizzes: self.quizzes.unwrap_or_default(),
        }
    }
}
