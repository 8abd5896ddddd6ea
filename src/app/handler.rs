//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! fetch completions, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin shim (keystrokes, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution by the shim
//!
//! Pagination causality is explicit: submitting a search and requesting more
//! results both return a [`Action::Fetch`] directly, rather than relying on
//! an observed page change to trigger a request as a side effect.

use crate::api::{FetchOutcome, FetchRequest};
use crate::app::{Action, AppState, InputMode};
use crate::domain::Result;

/// Events triggered by user input or by completed web requests.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Scrolls the result list down by one row.
    ScrollDown,
    /// Scrolls the result list up by one row.
    ScrollUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Gives focus to the search input box.
    SearchMode,
    /// Leaves search mode without submitting, keeping the input contents.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Submits the current query, starting a fresh page-1 search.
    ///
    /// A no-op when the query is empty: no request is issued and state is
    /// left unchanged.
    SubmitSearch,
    /// Requests the next result page.
    ///
    /// Ignored unless the current page is below the total page count and no
    /// other fetch is in flight.
    LoadMore,

    /// Reports a completed web request for a previously dispatched fetch.
    ///
    /// Stale completions (any fetch dispatched before the latest one) are
    /// discarded without touching state.
    FetchCompleted {
        /// The fetch this completion belongs to, reconstructed from the
        /// response context.
        request: FetchRequest,
        /// Decoded response or collapsed failure.
        outcome: FetchOutcome,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A tuple of (should render, actions). The actions vector is empty for
/// events with no side effects; `should_render` is `false` when the event
/// left visible state untouched.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for state
/// mutations that can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::ScrollDown => {
            state.scroll_down();
            Ok((true, vec![]))
        }
        Event::ScrollUp => {
            state.scroll_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }

            state.query.push(*c);
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }

            state.query.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let Some(request) = state.begin_search() else {
                tracing::debug!("empty query, ignoring submit");
                return Ok((false, vec![]));
            };

            tracing::debug!(query = %request.query, request_id = request.id, "search submitted");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::LoadMore => {
            let Some(request) = state.begin_load_more() else {
                tracing::debug!("load more not available, ignoring");
                return Ok((false, vec![]));
            };

            tracing::debug!(page = request.page, request_id = request.id, "loading more results");
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::FetchCompleted { request, outcome } => {
            let applied = state.apply_fetch(request, outcome.clone());
            Ok((applied, vec![]))
        }
    }
}

/// Short event name for tracing spans.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::ScrollDown => "ScrollDown",
        Event::ScrollUp => "ScrollUp",
        Event::CloseFocus => "CloseFocus",
        Event::SearchMode => "SearchMode",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitSearch => "SubmitSearch",
        Event::LoadMore => "LoadMore",
        Event::FetchCompleted { .. } => "FetchCompleted",
    }
}
