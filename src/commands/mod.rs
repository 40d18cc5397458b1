//! Command implementations for modelpin.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared context every command starts from.

mod list;
mod resolve;
mod run;
mod show;

use crate::cli::{Cli, Command};
use modelpin::catalog::ModelCatalog;
use modelpin::config::{Config, agent_dir};
use modelpin::error::{ModelPinError, Result};
use modelpin::extension::ModelPinExtension;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = CommandContext::resolve(cli.cwd, cli.config)?;

    match cli.command {
        Command::List(args) => list::cmd_list(&ctx, args),
        Command::Show(args) => show::cmd_show(&ctx, args),
        Command::Resolve(args) => resolve::cmd_resolve(&ctx, args),
        Command::Expand(args) => run::cmd_expand(&ctx, args),
        Command::Run(args) => run::cmd_run(&ctx, args),
    }
}

/// Resolved locations and configuration shared by all commands.
#[derive(Debug, Clone)]
pub(crate) struct CommandContext {
    /// Working directory for project prompts.
    pub cwd: PathBuf,
    /// Agent directory holding global prompts, config, and the catalog.
    pub agent_dir: PathBuf,
    /// Loaded configuration.
    pub config: Config,
}

impl CommandContext {
    /// Resolve the context from CLI overrides and the environment.
    pub fn resolve(cwd: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let cwd = match cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir().map_err(|e| {
                ModelPinError::UserError(format!("failed to get current working directory: {}", e))
            })?,
        };

        let agent_dir = agent_dir()?;
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_from_agent_dir(&agent_dir)?,
        };

        tracing::debug!(
            "context: cwd={} agent_dir={}",
            cwd.display(),
            agent_dir.display()
        );

        Ok(Self {
            cwd,
            agent_dir,
            config,
        })
    }

    /// An extension with templates loaded for the working directory.
    pub fn loaded_extension(&self) -> ModelPinExtension {
        let mut ext = ModelPinExtension::from_config(&self.config, &self.agent_dir);
        ext.load(&self.cwd);
        ext
    }

    /// Load the model catalog, preferring an explicit path.
    pub fn catalog(&self, path: Option<&Path>) -> Result<ModelCatalog> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.models_file(&self.agent_dir));
        ModelCatalog::load(path)
    }
}

/// Error for a template name that is not loaded.
pub(crate) fn unknown_template(ext: &ModelPinExtension, name: &str) -> ModelPinError {
    let mut names: Vec<&str> = ext.templates().keys().map(String::as_str).collect();
    names.sort_unstable();
    let available = if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    };
    ModelPinError::UserError(format!(
        "template '{}' not found.\nAvailable templates: {}\n\n\
         Templates need a `model:` field in their metadata block.",
        name, available
    ))
}
