//! Statewalk: a finite-state-machine engine with undo/redo history.
//!
//! A [`StateMachine`] is built from a static table of states and their
//! event-triggered transitions. It tracks the active state, applies
//! transitions by event ([`trigger`](StateMachine::trigger)) or by target
//! ([`change_state`](StateMachine::change_state)), and keeps a linear
//! undo/redo history of every direct change.
//!
//! # Core Concepts
//!
//! - **State table**: an immutable mapping from state name to transition
//!   rules, fixed for the machine's lifetime
//! - **Direct transitions**: all-or-nothing; a failed transition leaves
//!   the machine untouched and reports the offending identifier
//! - **History**: two stacks enabling temporal navigation; any new direct
//!   change invalidates pending redo history
//!
//! # Example
//!
//! ```rust
//! use statewalk::{Config, MachineError, StateMachine};
//!
//! let config = Config::from_json(&serde_json::json!({
//!     "initial": "normal",
//!     "states": {
//!         "normal": {"transitions": {"study": "busy"}},
//!         "busy": {"transitions": {"get_tired": "sleeping", "get_hungry": "hungry"}},
//!         "hungry": {"transitions": {"eat": "normal"}},
//!         "sleeping": {"transitions": {"get_hungry": "hungry", "get_up": "normal"}}
//!     }
//! }))?;
//!
//! let mut student = StateMachine::from_config(config);
//!
//! student.trigger("study")?;
//! student.trigger("get_hungry")?;
//! assert_eq!(student.state(), "hungry");
//!
//! // Walk back through history, then forward again.
//! assert!(student.undo());
//! assert_eq!(student.state(), "busy");
//! assert!(student.redo());
//! assert_eq!(student.state(), "hungry");
//!
//! // Unknown events are reported, not applied.
//! assert!(matches!(
//!     student.trigger("fly"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use core::{History, StateDefinition, StateMachine, StateTable};
pub use error::MachineError;
