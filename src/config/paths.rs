//! Agent directory resolution.

use crate::error::{ModelPinError, Result};
use std::path::PathBuf;

/// Environment variable overriding the agent directory.
pub const AGENT_DIR_ENV: &str = "MODELPIN_AGENT_DIR";

/// Directory name under the home directory when no override is set.
const DEFAULT_AGENT_DIR_NAME: &str = ".modelpin";

/// Resolve the agent directory holding global prompts, config and the model catalog.
///
/// `$MODELPIN_AGENT_DIR` wins when set and non-empty; otherwise `~/.modelpin`.
pub fn agent_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(AGENT_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_AGENT_DIR_NAME))
        .ok_or_else(|| {
            ModelPinError::UserError(format!(
                "could not determine home directory; set {} to choose an agent directory",
                AGENT_DIR_ENV
            ))
        })
}
