//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for each state, the table
//! of events it reacts to. Its serde shape is:
//!
//! ```text
//! {
//!   "initial": <state>,
//!   "states": {
//!     <state>: { "transitions": { <event>: <state>, ... } },
//!     ...
//!   }
//! }
//! ```
//!
//! The configuration is not validated beyond what individual operations
//! need: an event may point at a state that is never declared.

use crate::core::{Event, State};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map used for state and transition tables.
///
/// Re-inserting an existing key replaces its value without moving it, and
/// serde keeps document order, so enumeration follows declaration order.
pub type Table<K, V> = IndexMap<K, V>;

/// Definition of a single state: the events it reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State, E: Event> {
    /// Event to target state.
    #[serde(default)]
    pub transitions: Table<E, S>,
}

impl<S: State, E: Event> StateDefinition<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: Table::new(),
        }
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.transitions.insert(event, target);
        self
    }

    pub fn handles(&self, event: &E) -> bool {
        self.transitions.contains_key(event)
    }
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable machine configuration.
///
/// # Example
///
/// ```rust
/// use rewind::config::{MachineConfig, StateDefinition, Table};
///
/// let mut states = Table::new();
/// states.insert(
///     "off".to_string(),
///     StateDefinition::new().on("toggle".to_string(), "on".to_string()),
/// );
/// states.insert(
///     "on".to_string(),
///     StateDefinition::new().on("toggle".to_string(), "off".to_string()),
/// );
///
/// let config = MachineConfig::new("off".to_string(), states);
/// assert!(config.has_state(&"on".to_string()));
/// assert_eq!(
///     config.transition(&"off".to_string(), &"toggle".to_string()),
///     Some(&"on".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State = String, E: Event = String> {
    /// State the machine starts in and returns to on reset.
    pub initial: S,
    /// State definitions in declaration order.
    pub states: Table<S, StateDefinition<S, E>>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    pub fn new(initial: S, states: Table<S, StateDefinition<S, E>>) -> Self {
        Self { initial, states }
    }

    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    pub fn definition(&self, state: &S) -> Option<&StateDefinition<S, E>> {
        self.states.get(state)
    }

    /// Target of `event` from `state`, if that state declares it.
    pub fn transition(&self, state: &S, event: &E) -> Option<&S> {
        self.states
            .get(state)
            .and_then(|definition| definition.transitions.get(event))
    }

    /// All declared states, in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.keys()
    }

    /// Declared states whose transition table contains `event`, in
    /// declaration order.
    pub fn states_handling(&self, event: &E) -> Vec<&S> {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(state, _)| state)
            .collect()
    }
}
