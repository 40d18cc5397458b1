//! YAML model catalog and a console host for running templates from the CLI.
//!
//! # File Format
//!
//! ```yaml
//! models:
//!   - provider: anthropic
//!     id: claude-sonnet-4-5
//!     name: Claude Sonnet 4.5
//!     auth: true
//!   - provider: openrouter
//!     id: claude-sonnet-4-5
//! ```
//!
//! `auth` marks models with usable credentials and defaults to `false`.
//! Entries keep file order, which is the registry enumeration order used for
//! tie-breaking.

use crate::error::{ModelPinError, Result};
use crate::host::{AgentHost, ModelRegistry, NotifyLevel};
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::Path;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Provider identifier.
    pub provider: String,

    /// Model identifier within the provider.
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether credentials are configured for this model.
    #[serde(default)]
    pub auth: bool,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl CatalogEntry {
    pub fn model(&self) -> Model {
        Model {
            provider: self.provider.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Models known to the CLI, loaded from `models.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCatalog {
    pub models: Vec<CatalogEntry>,
}

impl ModelCatalog {
    /// Load a catalog from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelPinError::UserError(format!(
                "failed to read model catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: ModelCatalog = serde_yaml::from_str(yaml).map_err(|e| {
            ModelPinError::UserError(format!("failed to parse model catalog: {}", e))
        })?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate the catalog.
    ///
    /// Validation rules:
    /// - provider and id must be non-empty
    /// - provider must not contain `/`
    /// - `(provider, id)` pairs must be unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.models {
            if entry.provider.is_empty() || entry.id.is_empty() {
                return Err(ModelPinError::UserError(
                    "model catalog validation failed: provider and id must be non-empty"
                        .to_string(),
                ));
            }

            if entry.provider.contains('/') {
                return Err(ModelPinError::UserError(format!(
                    "model catalog validation failed: provider '{}' must not contain '/'",
                    entry.provider
                )));
            }

            if !seen.insert((entry.provider.as_str(), entry.id.as_str())) {
                return Err(ModelPinError::UserError(format!(
                    "model catalog validation failed: duplicate model '{}/{}'",
                    entry.provider, entry.id
                )));
            }
        }
        Ok(())
    }

    fn entry(&self, model: &Model) -> Option<&CatalogEntry> {
        self.models
            .iter()
            .find(|e| e.provider == model.provider && e.id == model.id)
    }
}

impl ModelRegistry for ModelCatalog {
    fn find(&self, provider: &str, id: &str) -> Option<Model> {
        self.models
            .iter()
            .find(|e| e.provider == provider && e.id == id)
            .map(CatalogEntry::model)
    }

    fn all(&self) -> Vec<Model> {
        self.models.iter().map(CatalogEntry::model).collect()
    }

    fn available(&self) -> Vec<Model> {
        self.models
            .iter()
            .filter(|e| e.auth)
            .map(CatalogEntry::model)
            .collect()
    }
}

/// An [`AgentHost`] over a catalog that writes to the terminal.
///
/// Notifications go to the error writer as `[level] text`; sent messages go
/// to the output writer. Activation fails for models without credentials.
pub struct ConsoleHost<O: Write, E: Write> {
    catalog: ModelCatalog,
    active: Option<Model>,
    out: O,
    err: E,
}

impl ConsoleHost<std::io::Stdout, std::io::Stderr> {
    /// A console host on stdout/stderr.
    pub fn stdio(catalog: ModelCatalog, active: Option<Model>) -> Self {
        Self::new(catalog, active, std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleHost<O, E> {
    pub fn new(catalog: ModelCatalog, active: Option<Model>, out: O, err: E) -> Self {
        Self {
            catalog,
            active,
            out,
            err,
        }
    }

    /// Consume the host, returning its writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> AgentHost for ConsoleHost<O, E> {
    fn registry(&self) -> &dyn ModelRegistry {
        &self.catalog
    }

    fn active_model(&self) -> Option<Model> {
        self.active.clone()
    }

    fn set_active_model(&mut self, model: &Model) -> bool {
        match self.catalog.entry(model) {
            Some(entry) if entry.auth => {
                self.active = Some(entry.model());
                true
            }
            _ => false,
        }
    }

    fn notify(&mut self, message: &str, level: NotifyLevel) {
        // Terminal output is best effort.
        let _ = writeln!(self.err, "[{}] {}", level, message);
    }

    fn send_message(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}
