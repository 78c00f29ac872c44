//! The state machine engine.
//!
//! Owns the immutable state table, the active state, and the undo/redo
//! history, and exposes the complete operation set: query, transition,
//! temporal navigation, and introspection.

use crate::config::Config;
use crate::core::history::History;
use crate::core::table::StateTable;
use crate::error::MachineError;

/// A finite-state machine with linear undo/redo history.
///
/// The machine is constructed once with a fixed table and initial state.
/// Every successful direct transition ([`change_state`](Self::change_state)
/// or [`trigger`](Self::trigger)) records the departed state so it can be
/// revisited with [`undo`](Self::undo) and [`redo`](Self::redo). Failed
/// transitions are all-or-nothing: the machine is left byte-for-byte
/// unchanged.
///
/// The machine provides no internal synchronization; sharing one instance
/// across threads requires external serialization of access.
///
/// # Example
///
/// ```rust
/// use statewalk::{Config, StateMachine};
///
/// let config = Config::from_json(&serde_json::json!({
///     "initial": "idle",
///     "states": {
///         "idle": {"transitions": {"start": "running"}},
///         "running": {"transitions": {"stop": "idle"}}
///     }
/// }))?;
///
/// let mut machine = StateMachine::from_config(config);
/// assert_eq!(machine.state(), "idle");
///
/// machine.trigger("start")?;
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    table: StateTable,
    initial: String,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at `initial` with empty history.
    ///
    /// The table becomes the machine's source of truth and is never
    /// mutated. `initial` is deliberately not checked against the table,
    /// preserving the behavior callers may rely on: a machine constructed
    /// with an unknown initial state simply starts (and resets) there,
    /// and can only leave it via [`change_state`](Self::change_state).
    pub fn new(table: StateTable, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            table,
            current: initial.clone(),
            initial,
            history: History::new(),
        }
    }

    /// Create a machine from a parsed [`Config`].
    pub fn from_config(config: Config) -> Self {
        Self::new(config.states, config.initial)
    }

    /// The active state name.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The reset target chosen at construction.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The state table this machine runs on.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Transition directly to `target`, bypassing event lookup.
    ///
    /// On success the departed state is recorded on the undo stack and the
    /// redo stack is cleared. This holds even when `target` equals the
    /// current state: a self-transition still consumes redo history and
    /// leaves an undo entry.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidState`] if `target` is not a key of the
    /// table. Nothing is mutated in that case.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.table.contains(target) {
            return Err(MachineError::InvalidState(target.to_string()));
        }
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.record(previous);
        Ok(())
    }

    /// Transition according to the current state's rule for `event`.
    ///
    /// Resolves the destination from the current state's definition and
    /// delegates to [`change_state`](Self::change_state), inheriting its
    /// history effects. A current state with no definition in the table
    /// (possible only via an unvalidated initial state) handles no events.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidTransition`] if the current state has no
    /// rule for `event`; [`MachineError::InvalidState`] if the rule's
    /// destination is absent from the table. Nothing is mutated in either
    /// case.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .table
            .get(&self.current)
            .and_then(|def| def.target(event))
            .ok_or_else(|| MachineError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        self.change_state(&target)
    }

    /// Restore the initial state and discard all history.
    ///
    /// Never fails; repeated calls are no-ops after the first.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.clear_history();
    }

    /// Discard all history without touching the active state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// All state names, in the table's natural key order.
    pub fn states(&self) -> Vec<&str> {
        self.table.states().collect()
    }

    /// State names with a transition rule for `event`, in key order.
    ///
    /// Returns an empty vector when no state handles the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.table.states_handling(event)
    }

    /// Step back to the most recently departed state.
    ///
    /// Returns `false` without mutating anything when the undo stack is
    /// empty; exhausted history is a normal condition, not a fault. On
    /// success the pre-undo state is pushed onto the redo stack.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Symmetric inverse of [`undo`](Self::undo): returns `false` when the
    /// redo stack is empty, and otherwise pushes the pre-redo state onto
    /// the undo stack.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(undone) => {
                self.current = undone;
                true
            }
            None => false,
        }
    }
}
