//! Collaborator interfaces provided by the host agent runtime.
//!
//! modelpin never owns the model registry, the active model, the UI or the
//! conversation. It reaches them through these two traits:
//!
//! - [`ModelRegistry`]: the set of known models and which have credentials
//! - [`AgentHost`]: active model control, notifications, and message dispatch
//!
//! The host delivers three events, mapped onto
//! [`ModelPinExtension`](crate::extension::ModelPinExtension) handlers:
//! load/session start, command invocation, and response completion. It must
//! deliver the response-completion event of a turn before starting the next
//! command invocation.

use crate::model::Model;
use std::fmt;

/// Read-only view of the host's model registry.
pub trait ModelRegistry {
    /// Look up the exact `(provider, id)` pair.
    fn find(&self, provider: &str, id: &str) -> Option<Model>;

    /// Every known model, in the registry's enumeration order.
    fn all(&self) -> Vec<Model>;

    /// The subset of [`all`](Self::all) with usable credentials.
    fn available(&self) -> Vec<Model>;
}

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyLevel::Info => write!(f, "info"),
            NotifyLevel::Warning => write!(f, "warning"),
            NotifyLevel::Error => write!(f, "error"),
        }
    }
}

/// The host runtime as seen by a command invocation.
pub trait AgentHost {
    /// The host's model registry.
    fn registry(&self) -> &dyn ModelRegistry;

    /// The currently active model, if any.
    fn active_model(&self) -> Option<Model>;

    /// Activate `model`. Returns `false` when the host could not switch
    /// (for example, missing credentials).
    fn set_active_model(&mut self, model: &Model) -> bool;

    /// Show a notification to the user.
    fn notify(&mut self, message: &str, level: NotifyLevel);

    /// Send a user message into the conversation.
    fn send_message(&mut self, text: &str);
}
