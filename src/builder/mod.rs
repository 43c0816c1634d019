//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and identifier macros for creating
//! state machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::config::StateDefinition;
use crate::core::{Event, State};

/// Create a state definition from `(event, target)` pairs.
///
/// # Example
///
/// ```
/// use rewind::builder::state;
///
/// let definition = state([
///     ("approve".to_string(), "published".to_string()),
///     ("reject".to_string(), "draft".to_string()),
/// ]);
///
/// assert!(definition.handles(&"reject".to_string()));
/// ```
pub fn state<S, E, I>(transitions: I) -> StateDefinition<S, E>
where
    S: State,
    E: Event,
    I: IntoIterator<Item = (E, S)>,
{
    StateDefinition {
        transitions: transitions.into_iter().collect(),
    }
}
