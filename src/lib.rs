//! modelpin: prompt templates that pin a model.
//!
//! A template file declares the model that should answer it. Running the
//! template switches the host agent to that model, sends the expanded prompt,
//! and switches back once the response completes.
//!
//! - [`template`]: discovery and parsing of template files
//! - [`expand`]: argument tokenization and placeholder substitution
//! - [`model`]: model-spec resolution against the host registry
//! - [`switch`]: the switch/restore state machine
//! - [`extension`]: the host-facing load / command / completion handlers
//! - [`host`]: traits the host runtime implements
//! - [`catalog`]: YAML model catalog and console host used by the CLI

pub mod catalog;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod expand;
pub mod extension;
pub mod host;
pub mod logging;
pub mod model;
pub mod switch;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ModelPinError, Result};
pub use extension::{Invocation, ModelPinExtension, PromptCommand};
