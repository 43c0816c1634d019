//! The state machine: current state, transitions, and undo/redo.
//!
//! A [`StateMachine`] owns its [`MachineConfig`], the current state, and a
//! [`History`] of visited states. Forward moves come from
//! [`change_state`](StateMachine::change_state) (any declared state) or
//! [`trigger`](StateMachine::trigger) (an event from the current state's
//! transition table). [`undo`](StateMachine::undo) and
//! [`redo`](StateMachine::redo) walk the history; a forward move after an
//! undo discards whatever could have been redone.
//!
//! # Quirks kept on purpose
//!
//! - `reset` jumps to the initial state without touching history, so the
//!   active state can differ from the entry under the history cursor.
//! - `redo` leaves the redo invalidation flag set by an earlier `undo`.
//! - `clear_history` keeps the cursor where it was.
//! - `trigger` does not check that the target state is declared.

mod error;

pub use error::MachineError;

use crate::config::MachineConfig;
use crate::core::{Event, History, State};
use tracing::{debug, trace};

/// Finite state machine with linear undo/redo history.
///
/// # Example
///
/// ```rust
/// use rewind::builder::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::<String, String>::new()
///     .initial("A".to_string())
///     .transition("A".to_string(), "go".to_string(), "B".to_string())
///     .transition("B".to_string(), "go".to_string(), "C".to_string())
///     .state("C".to_string())
///     .build()
///     .unwrap();
///
/// machine.trigger(&"go".to_string()).unwrap();
/// machine.trigger(&"go".to_string()).unwrap();
/// assert_eq!(machine.state(), "C");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "B");
///
/// // A new forward move drops the redo branch.
/// machine.trigger(&"go".to_string()).unwrap();
/// assert!(!machine.redo());
/// assert_eq!(machine.history().entries(), ["A", "B", "C"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State = String, E: Event = String> {
    config: MachineConfig<S, E>,
    state: S,
    history: History<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in the configuration's initial state.
    pub fn new(config: MachineConfig<S, E>) -> Self {
        let state = config.initial.clone();
        let history = History::new(state.clone());
        debug!(initial = state.name(), "state machine created");
        Self {
            config,
            state,
            history,
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`MachineError::MissingConfig`] when `config` is `None`.
    pub fn create(config: Option<MachineConfig<S, E>>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or(MachineError::MissingConfig)
    }

    /// The active state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The configuration the machine was created with.
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    /// Recorded states and the navigation cursor.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Go to `target` directly, ignoring transition tables.
    ///
    /// Fails with [`MachineError::UnknownState`] if `target` is not declared;
    /// the machine is left untouched in that case.
    pub fn change_state(&mut self, target: S) -> Result<(), MachineError> {
        if !self.config.has_state(&target) {
            return Err(MachineError::UnknownState {
                state: target.name().to_string(),
            });
        }
        self.advance(target, None);
        Ok(())
    }

    /// Follow `event` from the current state's transition table.
    ///
    /// Fails with [`MachineError::NoTransition`] if the current state does not
    /// declare `event`, or with [`MachineError::UnknownState`] if the current
    /// state itself is not declared. The target state is not checked.
    pub fn trigger(&mut self, event: &E) -> Result<(), MachineError> {
        let definition =
            self.config
                .definition(&self.state)
                .ok_or_else(|| MachineError::UnknownState {
                    state: self.state.name().to_string(),
                })?;
        let target = definition
            .transitions
            .get(event)
            .cloned()
            .ok_or_else(|| MachineError::NoTransition {
                state: self.state.name().to_string(),
                event: event.name().to_string(),
            })?;
        self.advance(target, Some(event));
        Ok(())
    }

    /// Return to the initial state without recording it in history.
    pub fn reset(&mut self) {
        debug!(
            from = self.state.name(),
            to = self.config.initial.name(),
            "reset to initial state"
        );
        self.state = self.config.initial.clone();
    }

    /// Declared states, in declaration order.
    ///
    /// With `Some(event)`, only the states whose transition table contains
    /// `event` are returned.
    pub fn states(&self, event: Option<&E>) -> Vec<&S> {
        match event {
            None => self.config.state_ids().collect(),
            Some(event) => self.config.states_handling(event),
        }
    }

    /// Step back to the previous state in history.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back() else {
            trace!(cursor = self.history.cursor(), "undo unavailable");
            return false;
        };
        self.state = previous.clone();
        trace!(
            to = self.state.name(),
            cursor = self.history.cursor(),
            "undo"
        );
        true
    }

    /// Step forward to the next state in history.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward() else {
            trace!(cursor = self.history.cursor(), "redo unavailable");
            return false;
        };
        self.state = next.clone();
        trace!(
            to = self.state.name(),
            cursor = self.history.cursor(),
            "redo"
        );
        true
    }

    /// Whether [`undo`](Self::undo) would move.
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Whether [`redo`](Self::redo) would move.
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Forget every recorded state. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn advance(&mut self, target: S, event: Option<&E>) {
        let from = std::mem::replace(&mut self.state, target.clone());
        let discarded = self.history.record(target);
        if discarded > 0 {
            debug!(discarded, "redo branch discarded");
        }
        debug!(
            from = from.name(),
            to = self.state.name(),
            event = event.map(|e| e.name()).unwrap_or("<direct>"),
            cursor = self.history.cursor(),
            "transition"
        );
    }
}
