use super::types::{RawAuditConfig, RawLearnerConfig, RawTrainerConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use trainer_core::config::{TrainerConfig, load_config_from_file, validate_config};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit path wins outright; otherwise user and project configs
    /// are merged, project values taking precedence.
    pub fn load(explicit: Option<&Path>) -> Result<TrainerConfig> {
        let config = match explicit {
            Some(path) => load_config_from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Self::load_layered()?,
        };

        validate_config(&config)?;
        Ok(config)
    }

    fn load_layered() -> Result<TrainerConfig> {
        let mut raw = RawTrainerConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        Ok(raw.finalize())
    }

    fn read_raw(path: &Path) -> Result<RawTrainerConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(raw)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "trainer").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with TRAINER_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("TRAINER_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".trainer/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawTrainerConfig, overlay: RawTrainerConfig) -> RawTrainerConfig {
        RawTrainerConfig {
            learner: RawLearnerConfig {
                actor: overlay.learner.actor.or(base.learner.actor),
            },
            audit: RawAuditConfig {
                simulated_ip: overlay.audit.simulated_ip.or(base.audit.simulated_ip),
            },
            roles: overlay.roles.or(base.roles),
            quizzes: overlay.quizzes.or(base.quizzes),
        }
    }
}
