//! Rewind: a small finite state machine with undo/redo history
//!
//! A machine is described by a declarative configuration: an initial state
//! and, per state, a table mapping events to target states. The machine
//! tracks the current state and records every forward move in a linear
//! history that can be walked with undo and redo.
//!
//! # Core Concepts
//!
//! - **State / Event**: identifiers, `String` by default or typed enums via
//!   the `State` and `Event` traits
//! - **Configuration**: `MachineConfig`, built directly, through serde, or
//!   with `StateMachineBuilder`
//! - **History**: the visited states plus a cursor; a forward move after an
//!   undo discards the redo branch
//!
//! # Example
//!
//! ```rust
//! use rewind::{MachineConfig, MachineError, StateMachine};
//!
//! let config: MachineConfig = serde_json::from_str(r#"{
//!     "initial": "A",
//!     "states": {
//!         "A": { "transitions": { "go": "B" } },
//!         "B": { "transitions": { "go": "C" } },
//!         "C": { "transitions": {} }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger(&"go".to_string()).unwrap();
//! assert_eq!(machine.state(), "B");
//!
//! assert_eq!(
//!     machine.change_state("Z".to_string()),
//!     Err(MachineError::UnknownState { state: "Z".to_string() })
//! );
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "A");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "B");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::config::{MachineConfig, StateDefinition, Table};
pub use crate::core::{Event, History, State};
pub use crate::machine::{MachineError, StateMachine};
