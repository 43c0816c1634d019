//! Core identifier and history types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - State and event identifiers via the `State` and `Event` traits
//! - The linear undo/redo `History`
//!
//! Nothing here knows about configuration or transition rules.

mod history;
mod state;

pub use history::History;
pub use state::{Event, State};
