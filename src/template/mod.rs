//! Prompt template model and discovery.
//!
//! Template files are markdown files with an optional metadata block:
//!
//! ```text
//! ---
//! model: anthropic/claude-sonnet-4-5
//! description: Review the staged diff
//! restore: true
//! ---
//!
//! Review the changes in $1 with a focus on $2.
//! ```
//!
//! Only files declaring `model` become templates. Files are discovered in a
//! global directory and a project directory; project templates override
//! global templates with the same name.

mod parse;
mod store;

#[cfg(test)]
mod tests;

pub use parse::{ParsedTemplate, parse_flag, parse_template};
pub use store::{PromptDirs, TemplateSet, TemplateStore};

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Where a template was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemplateSource {
    /// The global (per-user) prompts directory.
    User,
    /// The project prompts directory under the working directory.
    Project,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::User => write!(f, "user"),
            TemplateSource::Project => write!(f, "project"),
        }
    }
}

/// A loaded prompt template bound to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Command name, from the file name without `.md`.
    pub name: String,

    /// Optional display description.
    pub description: Option<String>,

    /// Template body with the metadata block removed.
    pub body: String,

    /// Model spec: a bare id or `provider/id`.
    pub model_spec: String,

    /// Whether to restore the previous model after the response completes.
    pub restore: bool,

    /// Which directory the template came from.
    pub source: TemplateSource,

    /// File the template was loaded from.
    pub path: PathBuf,

    /// Metadata keys not interpreted by modelpin.
    pub extra: BTreeMap<String, String>,
}

impl PromptTemplate {
    /// Build a template from parsed file content.
    ///
    /// Returns `None` when the metadata does not declare a non-empty `model`.
    pub fn from_parsed(
        name: impl Into<String>,
        parsed: ParsedTemplate,
        source: TemplateSource,
        path: impl Into<PathBuf>,
    ) -> Option<Self> {
        let ParsedTemplate { mut meta, body } = parsed;

        let model_spec = meta.remove("model").filter(|m| !m.trim().is_empty())?;
        let description = meta.remove("description").filter(|d| !d.is_empty());
        let restore = parse_flag(meta.remove("restore").as_deref(), true);

        Some(Self {
            name: name.into(),
            description,
            body,
            model_spec: model_spec.trim().to_string(),
            restore,
            source,
            path: path.into(),
            extra: meta,
        })
    }

    /// Description shown next to the command in the host UI.
    ///
    /// Format: `<description> [<model>] (<source>)`, description omitted when absent.
    pub fn command_description(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} [{}] ({})", desc, self.model_spec, self.source),
            None => format!("[{}] ({})", self.model_spec, self.source),
        }
    }
}
