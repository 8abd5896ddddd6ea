//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zplash library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult` events
//! 3. **Update**: Handle events, delegate to library layer
//! 4. **Render**: Call library render function
//!
//! # Web Requests
//!
//! Search fetches go through Zellij's `web_request` host call. Each dispatch
//! carries a context map identifying the request (id, query, page); the
//! matching `WebRequestResult` event returns that map, which is how a
//! completion finds its way back to the fetch that caused it.
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Enter)` → `Event::SubmitSearch` (in search mode)
//! - `Key(Esc)` → `Event::ExitSearch` (in search mode)
//! - `WebRequestResult` → `Event::FetchCompleted { request, outcome }`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`: Scroll down
//! - `k`/`Up`: Scroll up
//! - `m`: Load more results
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - Printable characters: Type the query
//! - `Enter`: Submit search
//! - `Esc`: Exit search
//! - `Backspace`: Delete last character

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zplash::api::{parse_response, FetchOutcome, FetchRequest};
use zplash::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the API key
/// used when dispatching web requests.
struct State {
    /// Core application state from library layer.
    app: zplash::app::AppState,

    /// Unsplash API access key from plugin configuration.
    api_key: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zplash::initialize(&default_config),
            api_key: String::new(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Dispatch HTTP requests to the Unsplash API
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: Completed search fetches
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zplash::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zplash::initialize(&config);
        self.api_key = config.api_key;
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zplash::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        Some(match key.bare_key {
            BareKey::Enter if self.app.input_mode == InputMode::Search => Event::SubmitSearch,
            BareKey::Esc if self.app.input_mode == InputMode::Search => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::ScrollDown,
            BareKey::Up => Event::ScrollUp,
            BareKey::Char(c) if self.app.input_mode == InputMode::Search => Event::Char(c),
            BareKey::Char('j') => Event::ScrollDown,
            BareKey::Char('k') => Event::ScrollUp,
            BareKey::Char('m') => Event::LoadMore,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a completed web request back to the fetch that caused it.
    ///
    /// The request identity is reconstructed from the context map that was
    /// attached at dispatch time; results without a recognizable context are
    /// ignored (they belong to no known fetch).
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request) = FetchRequest::from_context(context) else {
            tracing::debug!("web request result without fetch context, ignoring");
            return None;
        };

        let outcome = match parse_response(status, body) {
            Ok(response) => FetchOutcome::Success(response),
            Err(e) => FetchOutcome::Failure(e.to_string()),
        };

        Some(Event::FetchCompleted { request, outcome })
    }

    /// Handles permission request results.
    fn handle_permission_result(permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - searches will not work");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `Fetch`: Dispatch a tagged search request via `web_request`
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(ref request) => {
                tracing::debug!(
                    request_id = request.id,
                    page = request.page,
                    "dispatching web request"
                );
                web_request(
                    request.request_url(&self.api_key),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.to_context(),
                );
            }
        }
    }
}
