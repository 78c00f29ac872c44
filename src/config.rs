//! Machine configuration.
//!
//! Configurations use a small JSON-friendly shape:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle": {"transitions": {"start": "running"}},
//!     "running": {"transitions": {"stop": "idle"}}
//!   }
//! }
//! ```
//!
//! `initial` selects the starting state and reset target; `states` is the
//! full state/transition table. No other fields are recognized.

use crate::core::StateTable;
use serde::{Deserialize, Serialize};

/// Parsed machine configuration.
///
/// # Example
///
/// ```rust
/// use statewalk::{Config, StateMachine};
///
/// let config = Config::from_json(&serde_json::json!({
///     "initial": "draft",
///     "states": {
///         "draft": {"transitions": {"submit": "review"}},
///         "review": {"transitions": {"approve": "published", "reject": "draft"}},
///         "published": {}
///     }
/// }))?;
///
/// let machine = StateMachine::from_config(config);
/// assert_eq!(machine.state(), "draft");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Starting state and reset target.
    pub initial: String,

    /// The state/transition table.
    pub states: StateTable,
}

impl Config {
    /// Parse a configuration from a JSON value.
    ///
    /// Existence of `initial` in the table is not checked here or at
    /// machine construction; see [`StateMachine::new`](crate::StateMachine::new).
    pub fn from_json(json: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_configuration() {
        let config = Config::from_json(&serde_json::json!({
            "initial": "idle",
            "states": {
                "idle": {"transitions": {"start": "running"}},
                "running": {"transitions": {"stop": "idle"}}
            }
        }))
        .unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.len(), 2);
        assert_eq!(
            config.states.get("idle").unwrap().target("start"),
            Some("running")
        );
    }

    #[test]
    fn states_without_transitions_parse_as_empty() {
        let config = Config::from_json(&serde_json::json!({
            "initial": "end",
            "states": {"end": {}}
        }))
        .unwrap();

        assert!(config.states.get("end").unwrap().transitions.is_empty());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(Config::from_json(&serde_json::json!({"states": {}})).is_err());
        assert!(Config::from_json(&serde_json::json!({"initial": "a"})).is_err());
    }

    #[test]
    fn unrecognized_fields_are_ignored() {
        let config = Config::from_json(&serde_json::json!({
            "initial": "a",
            "states": {"a": {}},
            "version": 2
        }))
        .unwrap();
        assert_eq!(config.initial, "a");
    }

    #[test]
    fn configuration_round_trips_through_json() {
        let json = serde_json::json!({
            "initial": "a",
            "states": {
                "a": {"transitions": {"go": "b"}},
                "b": {"transitions": {}}
            }
        });

        let config = Config::from_json(&json).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json);
    }
}
