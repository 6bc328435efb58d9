//! Configuration loading from TOML files
//!
//! Provides file-based loading with validation.

use std::path::Path;

use tracing::warn;

use super::TrainerConfig;
use crate::error::ConfigError;

/// Load configuration from a TOML file
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<TrainerConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string
pub fn parse_config(toml_content: &str) -> Result<TrainerConfig, ConfigError> {
    toml::from_str(toml_content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load configuration, falling back to defaults when the file is missing or
/// unreadable
pub fn load_config_or_default(path: impl AsRef<Path>) -> TrainerConfig {
    let path = path.as_ref();
    load_config_from_file(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "using default trainer config");
        TrainerConfig::default()
    })
}

/// Validate that the permission table and quizzes can be built
pub fn validate_config(config: &TrainerConfig) -> Result<(), ConfigError> {
    config.permission_table()?;
    config.quiz_bank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config_empty() {
        let config = parse_config("").unwrap();
        assert_eq!(config, TrainerConfig::default());
    }

    #[test]
    fn test_parse_config_partial() {
        let toml = r#"
[learner]
actor = "dev-42"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.learner.actor, "dev-42");
        // Others should be default
        assert!(config.audit.simulated_ip.is_some());
        assert!(config.roles.is_empty());
    }

    #[test]
    fn test_parse_config_with_roles_and_quizzes() {
        let toml = r#"
[[roles]]
name = "patient"
actions = ["viewRecord"]

[[roles]]
name = "pharmacist"
actions = ["viewRecord", "dispense"]

[[quizzes]]
id = "minimumNecessary"
prompt = "Which principle limits PHI use to what a task needs?"
mode = "single"

[[quizzes.options]]
id = "min"
text = "Minimum Necessary"
correct = true

[[quizzes.options]]
id = "max"
text = "Maximum Availability"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.roles.len(), 2);
        assert_eq!(config.roles[1].actions, vec!["viewRecord", "dispense"]);
        assert_eq!(config.quizzes.len(), 1);
        assert!(config.quizzes[0].options[0].is_correct);
        assert!(!config.quizzes[0].options[1].is_correct);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config("invalid { toml");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_quiz_without_answer() {
        let toml = r#"
[[quizzes]]
id = "broken"
prompt = "?"
mode = "multiple"

[[quizzes.options]]
id = "a"
text = "A"
"#;
        let config = parse_config(toml).unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuiz { quiz_id, .. } if quiz_id == "broken"));
    }

    #[test]
    fn test_validate_rejects_duplicate_roles() {
        let toml = r#"
[[roles]]
name = "nurse"

[[roles]]
name = "nurse"
"#;
        let config = parse_config(toml).unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::DuplicateRole(_))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[audit]
simulated_ip = "10.1.2.3"
"#
        )
        .unwrap();

        let config = load_config_from_file(file.path()).unwrap();
        assert_eq!(config.audit.simulated_ip.as_deref(), Some("10.1.2.3"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_file("/nonexistent/path/trainer.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("/nonexistent/path/trainer.toml");
        assert_eq!(config, TrainerConfig::default());
    }
}
