//! Error types for trainer-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(String),

    #[error("role declared more than once: {0}")]
    DuplicateRole(String),

    #[error("quiz declared more than once: {0}")]
    DuplicateQuiz(String),

    #[error("invalid quiz {quiz_id}: {reason}")]
    InvalidQuiz { quiz_id: String, reason: String },
}

/// Recoverable outcomes of the scoring engine that carry no score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The quiz id is not part of the loaded quiz bank
    #[error("unknown quiz: {0}")]
    UnknownQuiz(String),

    /// `finalize` was called before any quiz was scored
    #[error("complete at least one quiz before requesting a final score")]
    NoQuizzesCompleted,
}

/// Error type for trainer operations
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::DuplicateRole("nurse".into());
        assert!(err.to_string().contains("nurse"));
    }

    #[test]
    fn test_no_quizzes_completed_message() {
        let err = ScoringError::NoQuizzesCompleted;
        assert_eq!(
            err.to_string(),
            "complete at least one quiz before requesting a final score"
        );
    }

    #[test]
    fn test_error_from_scoring() {
        let err: TrainerError = ScoringError::UnknownQuiz("q9".into()).into();
        assert!(matches!(err, TrainerError::Scoring(ScoringError::UnknownQuiz(_))));
        assert!(err.to_string().contains("q9"));
    }

    #[test]
    fn test_error_from_config() {
        let err: TrainerError = ConfigError::Parse("bad".into()).into();
        assert!(matches!(err, TrainerError::Config(_)));
    }
}
