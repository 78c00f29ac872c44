//! The immutable state/transition table.
//!
//! A table maps state names to their definitions, and each definition maps
//! event names to destination state names. Tables are supplied whole at
//! machine construction and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transition rules for a single state.
///
/// A definition holds the mapping from event name to destination state
/// name. An event absent from the mapping means the state has no
/// transition for it.
///
/// # Example
///
/// ```rust
/// use statewalk::core::StateDefinition;
///
/// let def = StateDefinition::with_transitions([("start", "running")]);
///
/// assert_eq!(def.target("start"), Some("running"));
/// assert_eq!(def.target("stop"), None);
/// assert!(def.handles("start"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to destination state name.
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a definition from `(event, destination)` pairs.
    ///
    /// Duplicate event names overwrite, per standard mapping semantics.
    pub fn with_transitions<I, E, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }

    /// Destination state for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state defines a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Mapping from state name to [`StateDefinition`].
///
/// Keys are unique by construction of the mapping (duplicate names
/// overwrite). Iteration follows the table's natural key order, which is
/// sorted lexicographically; this is the order contract for
/// [`StateMachine::states`](crate::StateMachine::states).
///
/// # Example
///
/// ```rust
/// use statewalk::core::{StateDefinition, StateTable};
///
/// let table = StateTable::from_iter([
///     ("idle", StateDefinition::with_transitions([("start", "running")])),
///     ("running", StateDefinition::with_transitions([("stop", "idle")])),
/// ]);
///
/// assert!(table.contains("idle"));
/// assert!(!table.contains("paused"));
/// assert_eq!(table.states().collect::<Vec<_>>(), ["idle", "running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    states: BTreeMap<String, StateDefinition>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `name` is a key of the table.
    ///
    /// This is the existence check every transition is gated on.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// The definition for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.states.get(name)
    }

    /// All state names, in the table's natural key order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// State names whose definition handles `event`, preserving key order.
    ///
    /// The returned names borrow only from the table, not from `event`.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether the table has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (N, StateDefinition)>>(iter: I) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|(name, def)| (name.into(), def))
                .collect(),
        }
    }
}
