//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! fetch completions. Actions bridge pure state transformations and effectful
//! operations like issuing web requests or hiding the plugin pane.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in sequence against the host API.

use crate::api::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
/// They are the boundary between pure state transformations and the host:
/// the library never performs I/O itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Dispatches one outbound web request against the search endpoint.
    ///
    /// The single side-effecting operation of the search controller: one HTTP
    /// GET per fetch, no other I/O. The request carries its own id, query and
    /// page so the completion can be applied (or discarded as stale) later.
    Fetch(FetchRequest),
}
