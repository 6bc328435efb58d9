//! One training session: both engines wired to a single audit log

use std::sync::Arc;

use tracing::info;

use crate::audit::AuditLog;
use crate::config::TrainerConfig;
use crate::error::Result;
use crate::policy::PolicyEngine;
use crate::scoring::ScoringEngine;

/// Owns the shared audit log and the engines that append to it.
///
/// `Send + Sync`: hosts that call in from several threads can share it
/// behind an `Arc`.
#[derive(Debug)]
pub struct TrainingSession {
    audit: Arc<AuditLog>,
    policy: PolicyEngine,
    scoring: ScoringEngine,
}

impl TrainingSession {
    /// Validate `config` and build a fresh session with an empty log
    pub fn new(config: &TrainerConfig) -> Result<Self> {
        let table = config.permission_table()?;
        let quizzes = config.quiz_bank()?;

        let mut audit = AuditLog::new();
        if let Some(ip) = &config.audit.simulated_ip {
            audit = audit.with_simulated_ip(ip.as_str());
        }
        let audit = Arc::new(audit);

        info!(
            roles = table.roles().len(),
            quizzes = quizzes.len(),
            "training session ready"
        );

        Ok(Self {
            policy: PolicyEngine::new(Arc::new(table), audit.clone()),
            scoring: ScoringEngine::new(Arc::new(quizzes), audit.clone())
                .with_actor(config.learner.actor.as_str()),
            audit,
        })
    }

    pub fn policy(&self) -> &PolicyEngine {
        &self.policy
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainerError;
    use crate::policy::RoleGrant;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_session_is_send_sync() {
        assert_send_sync::<TrainingSession>();
    }

    #[test]
    fn test_engines_share_one_log() {
        let session = TrainingSession::new(&TrainerConfig::default()).unwrap();
        session.policy().decide("doctor", "viewRecord");
        session.scoring().submit("bestPractices", ["a"]).unwrap();

        let actions: Vec<_> = session
            .audit()
            .recent(10)
            .into_iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(actions, vec!["QUIZ_COMPLETED", "viewRecord"]);
    }

    #[test]
    fn test_config_flows_into_entries() {
        let mut config = TrainerConfig::default();
        config.learner.actor = "trainee".into();
        config.audit.simulated_ip = None;

        let session = TrainingSession::new(&config).unwrap();
        let outcome = session.scoring().submit("bestPractices", ["a"]).unwrap();
        assert!(outcome.scored().is_some());

        let entry = &session.audit().recent(1)[0];
        assert_eq!(entry.actor, "trainee");
        assert!(entry.context.ip_address.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TrainerConfig {
            roles: vec![
                RoleGrant::new("admin", ["viewAudit"]),
                RoleGrant::new("admin", ["deleteRecord"]),
            ],
            ..Default::default()
        };
        let err = TrainingSession::new(&config).unwrap_err();
        assert!(matches!(err, TrainerError::Config(_)));
    }
}
