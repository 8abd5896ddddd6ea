//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information: windowed and truncated result rows, the conditional chrome
//! elements, and footer hints. They contain no business logic.

/// Complete UI view model for rendering.
///
/// Computed from `AppState` via `compute_viewmodel`. Every optional field
/// models a UI element that is only present in certain states: the search box
/// while editing, the result header once a search has completed, the error
/// line after a failure, the empty state for zero-result searches and the
/// load-more affordance while further pages exist.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible result rows, already windowed and truncated.
    pub items: Vec<ImageItem>,

    /// Search input box contents, present while the input has focus.
    pub search_bar: Option<SearchBarInfo>,

    /// Submitted query and approximate result count, present once a search
    /// has completed.
    pub result_header: Option<ResultHeader>,

    /// User-facing fetch failure message, present after a failed fetch.
    pub error: Option<String>,

    /// A page-1 fetch is in flight; the result area shows a loading marker
    /// instead of rows.
    pub loading: bool,

    /// Present when a search completed with no results.
    pub empty_state: Option<EmptyState>,

    /// Present while further pages can be requested.
    pub load_more: Option<LoadMoreInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Display information for a single image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    /// Image description, truncated to the description column width.
    pub description: String,

    /// Small-resolution URL, truncated to the remaining width.
    pub url: String,
}

/// Result header shown above the image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHeader {
    /// The query the current result set belongs to.
    pub query: String,

    /// Approximate count line, e.g. "24 images found".
    pub count_label: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No images found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Load-more affordance display information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreInfo {
    /// A load-more fetch is currently in flight.
    pub in_flight: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: scroll  m: load more  q: quit").
    pub keybindings: String,
}
