//! Application layer: state container, input modes, events and actions.
//!
//! This module implements the search controller. User input and fetch
//! completions arrive as [`Event`]s, [`handle_event`] mutates the central
//! [`AppState`] and emits [`Action`]s for the plugin shim to execute against
//! the host. All logic here is pure with respect to I/O, which keeps the
//! whole controller testable without a Zellij runtime.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, FETCH_ERROR_MSG};
