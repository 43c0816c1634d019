//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::{MachineConfig, StateDefinition, Table};
use crate::core::{Event, State};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a
/// [`transition`](Self::transition). Transition targets are not declared
/// implicitly.
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Table<S, StateDefinition<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Table::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state. Declaring it again keeps its transitions.
    pub fn state(mut self, state: S) -> Self {
        self.declare(state);
        self
    }

    /// Declare a state with a complete definition, replacing any earlier one.
    pub fn definition(mut self, state: S, definition: StateDefinition<S, E>) -> Self {
        self.states.insert(state, definition);
        self
    }

    /// Add `from --event--> to`, declaring `from` if needed.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.declare(from).transitions.insert(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing.
    pub fn build_config(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        self.build_config().map(StateMachine::new)
    }

    fn declare(&mut self, state: S) -> &mut StateDefinition<S, E> {
        self.states.entry(state).or_insert_with(StateDefinition::new)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
