//! Core state machine types and logic.
//!
//! This module contains the engine proper:
//! - The immutable state/transition table
//! - The undo/redo history stacks
//! - The machine that drives transitions over them
//!
//! Every operation here is synchronous and finite: mapping lookups and
//! stack pushes/pops, no I/O, no blocking.

mod history;
mod machine;
mod table;

pub use history::History;
pub use machine::StateMachine;
pub use table::{StateDefinition, StateTable};
