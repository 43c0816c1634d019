//! Linear undo/redo history of visited states.
//!
//! The history is a sequence of states plus a cursor pointing at the entry
//! that corresponds to the active state. Stepping back marks the redo branch
//! (everything after the cursor) for invalidation: the next recorded state
//! replaces that branch instead of being appended after it.

use super::state::State;

/// Ordered history of visited states with a navigation cursor.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new("draft".to_string());
/// history.record("review".to_string());
/// history.record("published".to_string());
///
/// assert_eq!(history.step_back().map(String::as_str), Some("review"));
/// assert!(history.is_redo_invalidation_pending());
///
/// // Recording after stepping back discards the redo branch.
/// history.record("rejected".to_string());
/// assert_eq!(history.entries(), ["draft", "review", "rejected"]);
/// assert!(history.step_forward().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<S: State> {
    entries: Vec<S>,
    cursor: usize,
    pending_redo_invalidation: bool,
}

impl<S: State> History<S> {
    /// Create a history holding only the starting state.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            pending_redo_invalidation: false,
        }
    }

    /// Record a forward move to `state`.
    ///
    /// The cursor advances first. If the last navigation was a step back,
    /// the history is truncated to the cursor (dropping the redo branch) and
    /// the pending flag is cleared. The state is then appended.
    ///
    /// Returns the number of entries discarded by the truncation.
    pub fn record(&mut self, state: S) -> usize {
        self.cursor += 1;
        let mut discarded = 0;
        if self.pending_redo_invalidation {
            discarded = self.entries.len().saturating_sub(self.cursor);
            self.entries.truncate(self.cursor);
            self.pending_redo_invalidation = false;
        }
        self.entries.push(state);
        discarded
    }

    /// Move the cursor one entry back and return the state found there.
    ///
    /// Returns `None` without moving when the history holds fewer than two
    /// entries, when the cursor is already at the start, or when the cursor
    /// no longer points inside the history (after [`clear`](Self::clear)).
    pub fn step_back(&mut self) -> Option<&S> {
        if self.entries.len() <= 1 || self.cursor == 0 {
            return None;
        }
        let target = self.cursor - 1;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        self.pending_redo_invalidation = true;
        self.entries.get(target)
    }

    /// Move the cursor one entry forward and return the state found there.
    ///
    /// Returns `None` without moving when the history holds fewer than two
    /// entries, when the cursor is already at the last entry, or when the
    /// next position lies outside the history. The pending redo
    /// invalidation flag is left as it was.
    pub fn step_forward(&mut self) -> Option<&S> {
        if self.entries.len() <= 1 || self.cursor == self.entries.len() - 1 {
            return None;
        }
        let target = self.cursor + 1;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        self.entries.get(target)
    }

    /// Drop every entry. The cursor keeps its previous value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether [`step_back`](Self::step_back) would move.
    pub fn can_step_back(&self) -> bool {
        self.entries.len() > 1 && self.cursor > 0 && self.cursor - 1 < self.entries.len()
    }

    /// Whether [`step_forward`](Self::step_forward) would move.
    pub fn can_step_forward(&self) -> bool {
        self.entries.len() > 1 && self.cursor + 1 < self.entries.len()
    }

    /// Recorded states, oldest first.
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Index of the entry matching the active state.
    ///
    /// May point past the end of [`entries`](Self::entries) after a clear.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True after a step back, until the next recorded state.
    pub fn is_redo_invalidation_pending(&self) -> bool {
        self.pending_redo_invalidation
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True after [`clear`](Self::clear) until the next recorded state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
