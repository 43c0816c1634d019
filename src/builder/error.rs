//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
