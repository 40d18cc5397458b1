//! Two-state switch/restore machine.

use crate::model::Model;

/// Whether a model switch is waiting to be undone.
///
/// Transitions:
/// - `switch`: `Idle` -> `AwaitingRestore`
/// - `restore`: `AwaitingRestore` -> `Idle`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SwitchState {
    /// No switch outstanding.
    #[default]
    Idle,
    /// A switch happened; `previous` is reactivated when the response completes.
    AwaitingRestore { previous: Model },
}

impl SwitchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SwitchState::Idle)
    }

    /// The model a pending restore will return to.
    pub fn pending_restore(&self) -> Option<&Model> {
        match self {
            SwitchState::Idle => None,
            SwitchState::AwaitingRestore { previous } => Some(previous),
        }
    }

    /// Leave `AwaitingRestore`, returning the held model. `Idle` stays `Idle`.
    pub fn take(&mut self) -> Option<Model> {
        match std::mem::take(self) {
            SwitchState::Idle => None,
            SwitchState::AwaitingRestore { previous } => Some(previous),
        }
    }
}
