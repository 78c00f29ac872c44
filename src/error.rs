//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur when transitioning a state machine.
///
/// Both variants signal caller misuse rather than recoverable runtime
/// conditions, and both carry the offending identifier so callers can
/// handle them structurally instead of matching on message strings.
/// A failed operation leaves the machine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The requested target state is not a key of the state table.
    #[error("Unknown state '{0}'")]
    InvalidState(String),

    /// The current state defines no transition for the given event.
    #[error("State '{state}' has no transition for event '{event}'")]
    InvalidTransition { state: String, event: String },
}
