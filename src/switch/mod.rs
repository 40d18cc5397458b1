//! Switch-and-restore of the active model.
//!
//! A template invocation may switch the host to another model; the response
//! completion event later switches back. Both halves go through one
//! [`ModelSwitcher`], which owns the [`SwitchState`]. The state holds at most
//! one restore target and is never shared through globals.
//!
//! Correctness relies on the host delivering each response-completion event
//! before the next command invocation. A switch that arrives while a restore
//! is still pending is logged and keeps the earlier restore target.

mod controller;
mod state;


pub use controller::{ModelSwitcher, RestoreOutcome, SwitchOutcome};
pub use state::SwitchState;
