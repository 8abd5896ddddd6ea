//! Zplash: A Zellij plugin for searching Unsplash images from the terminal.
//!
//! Zplash is a terminal multiplexer plugin that provides:
//! - Keyword search against the Unsplash photo API
//! - A paginated, scrollable result list with descriptions and image URLs
//! - Incremental "load more" pagination (8 images per page)
//! - Stale-response protection for overlapping in-flight requests

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────┐
//! │ UI Layer (ui/)    │        │ API Layer (api/)  │
//! │ - Rendering       │        │ - Request URLs    │
//! │ - Theming         │        │ - Response parse  │
//! │ - Components      │        │ - Context tagging │
//! └───────────────────┘        └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Image model (domain/image)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based span export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Unsplash search API requests and response parsing
//! - [`domain`]: Core domain types (Image, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing with file export
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zplash.wasm" {
//!         api_key "YOUR_UNSPLASH_ACCESS_KEY"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Request web access permission
//!    - Subscribe to Zellij events
//!
//! 2. **Search**:
//!    - User types a query and submits with Enter
//!    - A tagged fetch request is dispatched via Zellij's `web_request`
//!    - The `WebRequestResult` event carries the request tag back
//!
//! 3. **Completion**:
//!    - The response body is parsed into images and a page count
//!    - Stale completions (superseded by a newer request) are discarded
//!    - Applied completions update results, pagination, and flags
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, search box, results, footer)
//!    - Handle user input (j/k/m//`/`/q)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use zplash::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     api_key: "demo-key".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! // Type a query and submit it
//! for c in "cats".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch)?;
//! // actions now contains a Fetch action for page 1
//! # assert_eq!(actions.len(), 1);
//! # Ok::<(), zplash::ZplashError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit Fetch Causality
//!
//! Network fetches are caused directly by the operations that need them:
//! submitting a search dispatches a page-1 fetch, loading more dispatches a
//! fetch for the next page. Pagination state advances only when a fetch
//! completes and applies, never speculatively.
//!
//! ## Request Tagging
//!
//! Every fetch carries a monotonically increasing id, round-tripped through
//! Zellij's web request context map. Completions whose id is not the latest
//! are discarded, so a slow response can never overwrite the results of a
//! newer search.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Image, Result, ZplashError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zplash.wasm" {
///     api_key "YOUR_UNSPLASH_ACCESS_KEY"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Unsplash API access key.
    ///
    /// Required for searches to succeed; an empty key causes every request
    /// to be rejected by the API.
    pub api_key: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to defaults; a missing
    /// `api_key` becomes an empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zplash::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "secret".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key, "secret");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            api_key: config.get("api_key").cloned().unwrap_or_default(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme. Theme resolution order:
/// `theme_file` if set, then `theme_name`, then the built-in default. Load
/// failures fall back to the default theme with a debug log.
///
/// # Example
///
/// ```rust
/// use zplash::{initialize, Config, InputMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.input_mode, InputMode::Search);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zplash plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
