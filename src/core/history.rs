//! Undo/redo history stacks.
//!
//! History is a pair of ordered stacks of state names: the undo stack holds
//! previously visited states (most recent last), the redo stack holds states
//! that were undone. The live current state is never stored here; callers
//! hand it in at the moment of an undo or redo swap.

/// Linear undo/redo history of state names.
///
/// Stack discipline: every direct state change records the pre-transition
/// state on the undo stack and invalidates the redo stack. Undoing moves the
/// current state to the redo stack; redoing moves it back.
///
/// # Example
///
/// ```rust
/// use statewalk::core::History;
///
/// let mut history = History::new();
/// history.record("idle".to_string());
///
/// let previous = history.undo("running".to_string());
/// assert_eq!(previous.as_deref(), Some("idle"));
/// assert_eq!(history.redo_stack(), ["running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a direct state change away from `previous`.
    ///
    /// Pushes `previous` onto the undo stack and clears the redo stack
    /// unconditionally; any forward history is invalidated by a new change.
    pub fn record(&mut self, previous: String) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step backwards, exchanging `current` for the most recent undo entry.
    ///
    /// Returns the state to restore, or `None` if there is nothing to undo,
    /// in which case `current` is discarded and neither stack changes.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forwards, exchanging `current` for the most recent redo entry.
    ///
    /// Symmetric inverse of [`undo`](Self::undo): returns the state to
    /// restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let undone = self.redo.pop()?;
        self.undo.push(current);
        Some(undone)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Previously visited states, most recent last.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// Undone states, most recent last.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    /// Check whether both stacks are empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.undo_stack().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn record_pushes_most_recent_last() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        assert_eq!(history.undo_stack(), ["a", "b"]);
    }

    #[test]
    fn record_clears_redo() {
        let mut history = History::new();
        history.record("a".to_string());
        assert_eq!(history.undo("b".to_string()), Some("a".to_string()));
        assert_eq!(history.redo_stack(), ["b"]);

        history.record("a".to_string());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn undo_on_empty_stack_leaves_history_untouched() {
        let mut history = History::new();
        assert_eq!(history.undo("a".to_string()), None);
        assert!(history.is_empty());
    }

    #[test]
    fn redo_on_empty_stack_leaves_history_untouched() {
        let mut history = History::new();
        history.record("a".to_string());
        assert_eq!(history.redo("b".to_string()), None);
        assert_eq!(history.undo_stack(), ["a"]);
    }

    #[test]
    fn undo_then_redo_restores_both_stacks() {
        let mut history = History::new();
        history.record("a".to_string());
        let snapshot = history.clone();

        let previous = history.undo("b".to_string()).unwrap();
        assert_eq!(previous, "a");

        let undone = history.redo(previous).unwrap();
        assert_eq!(undone, "b");
        assert_eq!(history, snapshot);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        assert_eq!(history.undo("c".to_string()), Some("b".to_string()));

        history.clear();
        assert!(history.is_empty());
    }
}
