//! Error types for modelpin.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for modelpin operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]). Inside the
/// extension, every variant is scoped to the single invocation that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelPinError {
    /// User provided invalid arguments or the environment is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A `provider/id` model spec with an empty provider or id.
    #[error("invalid model spec '{spec}': expected 'provider/id' with both parts non-empty")]
    InvalidFormat { spec: String },

    /// No registry entry matches the model spec.
    #[error("model '{spec}' not found in the model registry")]
    NotFound { spec: String },

    /// Several providers register the id and none has credentials configured.
    #[error(
        "model '{spec}' is ambiguous and none of the candidates has credentials configured; use one of: {}",
        options.join(", ")
    )]
    Ambiguous { spec: String, options: Vec<String> },

    /// The registry knows the model but the host refused to activate it.
    #[error("failed to switch to model '{model}' (are credentials configured?)")]
    ActivationFailed { model: String },

    /// A command was registered for a template that is no longer loaded.
    #[error("prompt template '{name}' is no longer available; reload prompts to refresh commands")]
    StalePrompt { name: String },
}

impl ModelPinError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ModelPinError::UserError(_) => exit_codes::USER_ERROR,
            ModelPinError::StalePrompt { .. } => exit_codes::USER_ERROR,
            ModelPinError::InvalidFormat { .. }
            | ModelPinError::NotFound { .. }
            | ModelPinError::Ambiguous { .. } => exit_codes::RESOLUTION_FAILURE,
            ModelPinError::ActivationFailed { .. } => exit_codes::ACTIVATION_FAILURE,
        }
    }
}

/// Result type alias for modelpin operations.
pub type Result<T> = std::result::Result<T, ModelPinError>;
