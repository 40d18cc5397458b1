//! Host-facing extension: one command per model-bound template.
//!
//! The host drives three handlers:
//!
//! - [`ModelPinExtension::load`] on startup and session start
//! - [`ModelPinExtension::handle_command`] when the user runs a template command
//! - [`ModelPinExtension::on_response_complete`] when the agent finishes responding
//!
//! An invocation resolves the template's model, switches to it, expands the
//! body with the command arguments, and sends the result as a user message.
//! The completion handler switches back.


use crate::config::Config;
use crate::error::{ModelPinError, Result};
use crate::expand;
use crate::host::{AgentHost, NotifyLevel};
use crate::model::{Model, ModelResolver};
use crate::switch::{ModelSwitcher, RestoreOutcome, SwitchOutcome, SwitchState};
use crate::template::{PromptDirs, PromptTemplate, TemplateSet, TemplateStore};
use std::path::Path;
use tracing::{debug, info};

/// A command the host should register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCommand {
    pub name: String,
    pub description: String,
}

/// A completed template invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Template name.
    pub template: String,
    /// Model the template resolved to.
    pub model: Model,
    /// What the switcher did.
    pub switch: SwitchOutcome,
    /// The message sent to the host.
    pub message: String,
}

/// Template commands with automatic model switch and restore.
#[derive(Debug, Clone)]
pub struct ModelPinExtension {
    store: TemplateStore,
    resolver: ModelResolver,
    templates: TemplateSet,
    switcher: ModelSwitcher,
}

impl ModelPinExtension {
    pub fn new(store: TemplateStore, resolver: ModelResolver) -> Self {
        Self {
            store,
            resolver,
            templates: TemplateSet::new(),
            switcher: ModelSwitcher::new(),
        }
    }

    /// Build the extension from config and the agent directory.
    pub fn from_config(config: &Config, agent_dir: &Path) -> Self {
        Self::new(
            TemplateStore::new(PromptDirs::from_config(config, agent_dir)),
            ModelResolver::new(config.provider_priority.clone()),
        )
    }

    /// Reload templates for `cwd`, replacing the previous set wholesale.
    ///
    /// Returns the commands to register, sorted by name.
    pub fn load(&mut self, cwd: &Path) -> Vec<PromptCommand> {
        self.templates = self.store.load_all(cwd);
        info!("loaded {} model-bound prompt template(s)", self.templates.len());

        let mut commands: Vec<PromptCommand> = self
            .templates
            .values()
            .map(|t| PromptCommand {
                name: t.name.clone(),
                description: t.command_description(),
            })
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Option<&PromptTemplate> {
        self.templates.get(name)
    }

    pub fn resolver(&self) -> &ModelResolver {
        &self.resolver
    }

    pub fn switch_state(&self) -> &SwitchState {
        self.switcher.state()
    }

    /// Run the template command `name` with the raw argument string `args`.
    ///
    /// Nothing is sent and no state changes when resolution or activation fails.
    ///
    /// # Errors
    ///
    /// - `StalePrompt` if `name` is no longer loaded
    /// - `InvalidFormat`, `NotFound`, `Ambiguous` from model resolution
    /// - `ActivationFailed` if the host refuses the switch
    pub fn invoke<H>(&mut self, host: &mut H, name: &str, args: &str) -> Result<Invocation>
    where
        H: AgentHost + ?Sized,
    {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| ModelPinError::StalePrompt {
                name: name.to_string(),
            })?;

        let resolved = self.resolver.resolve(host.registry(), &template.model_spec)?;
        debug!(
            "template '{}' model '{}' resolved to {} ({})",
            name, template.model_spec, resolved.model, resolved.source
        );

        let switch = self
            .switcher
            .switch_to(host, &resolved.model, template.restore)?;

        let message = expand::render(&template.body, args);
        host.send_message(&message);

        Ok(Invocation {
            template: name.to_string(),
            model: resolved.model,
            switch,
            message,
        })
    }

    /// Command handler for the host: like [`invoke`](Self::invoke), but every
    /// error is reported as an error notification instead of returned.
    ///
    /// Returns whether a message was sent.
    pub fn handle_command<H>(&mut self, host: &mut H, name: &str, args: &str) -> bool
    where
        H: AgentHost + ?Sized,
    {
        match self.invoke(host, name, args) {
            Ok(_) => true,
            Err(err) => {
                debug!("template '{}' aborted: {}", name, err);
                host.notify(&err.to_string(), NotifyLevel::Error);
                false
            }
        }
    }

    /// Response-completion handler: restore the model a switch replaced.
    pub fn on_response_complete<H>(&mut self, host: &mut H) -> RestoreOutcome
    where
        H: AgentHost + ?Sized,
    {
        self.switcher.restore(host)
    }
}
