//! Model handles and model-spec resolution.
//!
//! A template names its model either as a bare id (`claude-sonnet-4-5`) or as
//! `provider/id` (`anthropic/claude-sonnet-4-5`). [`ModelResolver`] turns that
//! spec into exactly one [`Model`] from the host registry, or a resolution
//! error.

mod resolve;

pub use resolve::{ModelResolver, ResolutionSource, ResolvedModel};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete model known to the host registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Provider identifier (e.g., "anthropic").
    pub provider: String,

    /// Model identifier within the provider (e.g., "claude-sonnet-4-5").
    pub id: String,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Model {
    pub fn new(provider: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
            name: None,
        }
    }

    /// The `provider/id` form of this model.
    pub fn key(&self) -> String {
        format!("{}/{}", self.provider, self.id)
    }

    /// Whether both handles refer to the same `(provider, id)` pair.
    ///
    /// Display names are ignored.
    pub fn same_as(&self, other: &Model) -> bool {
        self.provider == other.provider && self.id == other.id
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.id)
    }
}
