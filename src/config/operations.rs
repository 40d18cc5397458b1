//! Config loading, validation, and path helpers.

use super::model::Config;
use crate::error::{ModelPinError, Result};
use std::path::{Path, PathBuf};

/// Config file name inside the agent directory.
pub const CONFIG_FILE_NAME: &str = "modelpin.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are preserved for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ModelPinError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelPinError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `modelpin.yaml` from the agent directory, falling back to defaults
    /// when the file does not exist.
    pub fn load_from_agent_dir<P: AsRef<Path>>(agent_dir: P) -> Result<Self> {
        let path = agent_dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ModelPinError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `provider_priority` entries must be non-empty
    /// - `project_prompts_dir` must be a non-empty relative path
    pub fn validate(&self) -> Result<()> {
        if self.provider_priority.iter().any(|p| p.trim().is_empty()) {
            return Err(ModelPinError::UserError(
                "config validation failed: provider_priority entries must be non-empty"
                    .to_string(),
            ));
        }

        if self.project_prompts_dir.trim().is_empty() {
            return Err(ModelPinError::UserError(
                "config validation failed: project_prompts_dir must be non-empty".to_string(),
            ));
        }

        if Path::new(&self.project_prompts_dir).is_absolute() {
            return Err(ModelPinError::UserError(format!(
                "config validation failed: project_prompts_dir must be relative to the working directory (found '{}')",
                self.project_prompts_dir
            )));
        }

        Ok(())
    }

    /// Global prompts directory, defaulting to `<agent dir>/prompts`.
    pub fn global_prompts_dir(&self, agent_dir: &Path) -> PathBuf {
        self.global_prompts_dir
            .clone()
            .unwrap_or_else(|| agent_dir.join("prompts"))
    }

    /// Model catalog path, defaulting to `<agent dir>/models.yaml`.
    pub fn models_file(&self, agent_dir: &Path) -> PathBuf {
        self.models_file
            .clone()
            .unwrap_or_else(|| agent_dir.join("models.yaml"))
    }
}
