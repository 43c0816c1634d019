//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur when creating or driving a state machine.
///
/// Identifiers are carried by name so the error does not depend on the
/// machine's state and event types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("No configuration supplied")]
    MissingConfig,

    #[error("State '{state}' doesn't exist")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },
}
