//! Configuration model for modelpin.
//!
//! This module defines the Config struct that represents `<agent dir>/modelpin.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are kept),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
mod paths;


// Re-export public API
pub use model::{Config, DEFAULT_PROJECT_PROMPTS_DIR, default_provider_priority};
pub use paths::{AGENT_DIR_ENV, agent_dir};
