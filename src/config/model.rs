//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Project prompts directory, relative to the working directory.
pub const DEFAULT_PROJECT_PROMPTS_DIR: &str = ".modelpin/prompts";

/// Provider order used to break ties between credentialed models sharing an id.
pub fn default_provider_priority() -> Vec<String> {
    vec![
        "anthropic".to_string(),
        "github-copilot".to_string(),
        "openrouter".to_string(),
    ]
}

fn default_project_prompts_dir() -> String {
    DEFAULT_PROJECT_PROMPTS_DIR.to_string()
}

/// Configuration for modelpin.
///
/// This struct represents the contents of `<agent dir>/modelpin.yaml`.
/// Unknown fields in the YAML are preserved in `extra` for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model resolution
    // =========================================================================
    /// Provider priority for bare model ids that several credentialed providers serve.
    #[serde(default = "default_provider_priority")]
    pub provider_priority: Vec<String>,

    // =========================================================================
    // Locations
    // =========================================================================
    /// Global prompts directory (default: `<agent dir>/prompts`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_prompts_dir: Option<PathBuf>,

    /// Project prompts directory relative to the working directory.
    #[serde(default = "default_project_prompts_dir")]
    pub project_prompts_dir: String,

    /// Model catalog used by the CLI (default: `<agent dir>/models.yaml`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_file: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_priority: default_provider_priority(),
            global_prompts_dir: None,
            project_prompts_dir: default_project_prompts_dir(),
            models_file: None,
            extra: BTreeMap::new(),
        }
    }
}
