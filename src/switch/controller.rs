//! Model switch controller.

use super::SwitchState;
use crate::error::{ModelPinError, Result};
use crate::host::{AgentHost, NotifyLevel};
use crate::model::Model;
use tracing::{debug, info, warn};

/// Result of a switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The target was already active; nothing changed.
    AlreadyActive,
    /// The host switched to `to`.
    Switched {
        from: Option<Model>,
        to: Model,
        /// Whether a restore is now pending for this switch.
        restore_pending: bool,
    },
}

/// Result of handling a response-completion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No switch was outstanding.
    NothingPending,
    /// The previous model is active again.
    Restored(Model),
    /// The host refused to reactivate the previous model. The pending restore is dropped.
    Failed(Model),
}

/// Owns the switch state and drives both halves of a switch.
#[derive(Debug, Clone, Default)]
pub struct ModelSwitcher {
    state: SwitchState,
}

impl ModelSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SwitchState {
        &self.state
    }

    /// Activate `target`, remembering the current model when `restore` is set.
    ///
    /// The state only changes after the host confirms the activation. A
    /// request for the already-active model is a no-op. Without an active
    /// model there is nothing to return to, so no restore is scheduled.
    ///
    /// # Errors
    ///
    /// `ActivationFailed` if the host refuses the switch.
    pub fn switch_to<H>(
        &mut self,
        host: &mut H,
        target: &Model,
        restore: bool,
    ) -> Result<SwitchOutcome>
    where
        H: AgentHost + ?Sized,
    {
        let current = host.active_model();
        if current.as_ref().is_some_and(|c| c.same_as(target)) {
            debug!("model {} already active, not switching", target);
            return Ok(SwitchOutcome::AlreadyActive);
        }

        if let Some(pending) = self.state.pending_restore() {
            // Host delivered a new invocation before the previous response completed.
            warn!(
                "switching to {} while a restore to {} is pending; keeping the earlier restore target",
                target, pending
            );
        }

        if !host.set_active_model(target) {
            return Err(ModelPinError::ActivationFailed {
                model: target.key(),
            });
        }

        let from_label = current
            .as_ref()
            .map(Model::key)
            .unwrap_or_else(|| "(none)".to_string());
        info!("switched model {} -> {}", from_label, target);

        if restore && self.state.is_idle() {
            if let Some(previous) = &current {
                self.state = SwitchState::AwaitingRestore {
                    previous: previous.clone(),
                };
            } else {
                debug!("no model was active before the switch; nothing to restore");
            }
        }

        Ok(SwitchOutcome::Switched {
            from: current,
            to: target.clone(),
            restore_pending: !self.state.is_idle(),
        })
    }

    /// Undo the outstanding switch, if any.
    ///
    /// Reactivates the held model, clears the state, then notifies the user.
    /// With no switch outstanding this is silent.
    pub fn restore<H>(&mut self, host: &mut H) -> RestoreOutcome
    where
        H: AgentHost + ?Sized,
    {
        let Some(previous) = self.state.pending_restore().cloned() else {
            debug!("response complete with no pending restore");
            return RestoreOutcome::NothingPending;
        };

        let activated = host.set_active_model(&previous);
        self.state.take();

        if activated {
            info!("restored model {}", previous);
            host.notify(&format!("Restored model {}", previous), NotifyLevel::Info);
            RestoreOutcome::Restored(previous)
        } else {
            warn!("failed to restore model {}", previous);
            host.notify(
                &format!("Failed to restore model {}", previous),
                NotifyLevel::Warning,
            );
            RestoreOutcome::Failed(previous)
        }
    }
}
