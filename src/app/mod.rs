//! Application layer coordinating state, events, and actions.
//!
//! Sits between the host loop (main.rs) and the catalog/engine/ui layers:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → OutputSink
//! ```
//!
//! # Modules
//!
//! - [`actions`]: page effects emitted by the event handler
//! - [`handler`]: event parsing and processing
//! - [`modes`]: slot identifiers and selection policies
//! - [`state`]: the selection state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InitialSelection, LookupMissPolicy, Slot};
pub use state::{AppState, SelectionOutcome, SelectionState, DEFAULT_EMPTY_MESSAGE};
