//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the search-controller operations (submit, load more,
//! apply completion) and UI view model generation. It is the single source of
//! truth for all transient UI state.
//!
//! # State Components
//!
//! - **Query**: the live input buffer, read at submit time
//! - **Result set**: accumulated image records for the submitted query
//! - **Pagination**: current page and the API-reported total page count
//! - **UI flags**: `loading`, `load_more_loading`, `search_performed`,
//!   `error_msg`
//! - **Request sequence**: the id of the most recently dispatched fetch
//!
//! # Fetch discipline
//!
//! Fetch dispatch and completion are modeled explicitly: `begin_search` and
//! `begin_load_more` produce a tagged [`FetchRequest`] (or `None` when the
//! operation is a no-op) and `apply_fetch` folds a completion back into state,
//! discarding it when a newer fetch has been dispatched since. Page advances
//! only when a completion is applied, so a failed load-more leaves the
//! pagination cursor untouched.

use crate::api::{FetchOutcome, FetchRequest, IMAGES_PER_PAGE};
use crate::domain::Image;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, ImageItem, LoadMoreInfo, ResultHeader, SearchBarInfo, UIViewModel,
};

use super::modes::InputMode;

/// The single user-facing failure message.
///
/// Network errors, non-2xx responses and malformed payloads all collapse to
/// this string; the specific cause is only recorded in traces.
pub const FETCH_ERROR_MSG: &str = "Error fetching images. Try again later.";

/// Width of the description column in the result list.
const DESCRIPTION_COLUMN_WIDTH: usize = 42;

/// Gap between the description and URL columns.
const COLUMN_GAP: usize = 2;

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input and fetch completions; view models are computed on demand from
/// state snapshots. One instance is owned by the plugin shim — no globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live contents of the search input field.
    ///
    /// Edited by `Char`/`Backspace` events while in search mode and read at
    /// submit time. Editing it never triggers a fetch by itself.
    pub query: String,

    /// The query backing the current result set.
    ///
    /// Updated only when a fetch completes successfully, so the result header
    /// never shows a query whose results have not arrived yet.
    pub submitted_query: String,

    /// Accumulated image records for the submitted query.
    ///
    /// Replaced wholesale by a page-1 completion, extended in arrival order
    /// by later pages. Left untouched by failures and stale completions.
    pub images: Vec<Image>,

    /// 1-based index of the most recently applied page.
    pub page: u32,

    /// Total pages reported by the API for the submitted query.
    ///
    /// Zero until the first successful fetch, and zero for queries that match
    /// nothing. Drives the load-more affordance and the displayed count.
    pub total_pages: u32,

    /// A fetch for page 1 is in flight.
    pub loading: bool,

    /// A fetch for a page beyond 1 is in flight.
    pub load_more_loading: bool,

    /// At least one fetch completed successfully for the current search.
    ///
    /// Cleared synchronously when a new search is submitted and set only when
    /// its response is applied.
    pub search_performed: bool,

    /// Last fetch failure description, empty when none.
    pub error_msg: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Index of the first visible result row.
    pub scroll_offset: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Id of the most recently dispatched fetch.
    ///
    /// Completions carrying any other id are stale and discarded.
    latest_request: u64,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// The plugin starts in search mode since there is nothing to display
    /// until a query has been submitted.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            submitted_query: String::new(),
            images: Vec::new(),
            page: 1,
            total_pages: 0,
            loading: false,
            load_more_loading: false,
            search_performed: false,
            error_msg: String::new(),
            input_mode: InputMode::Search,
            scroll_offset: 0,
            theme,
            latest_request: 0,
        }
    }

    /// Begins a fresh search for the current query contents.
    ///
    /// Returns the tagged page-1 fetch to dispatch, or `None` when the query
    /// is empty (an empty submit is a complete no-op: no request, no state
    /// change). Otherwise clears `search_performed`, `load_more_loading` and
    /// the error message, raises `loading` and resets the scroll position.
    ///
    /// A new search may always be submitted, including while an older fetch
    /// is still in flight; the older completion will fail the staleness check
    /// in [`apply_fetch`](Self::apply_fetch) and be discarded.
    pub fn begin_search(&mut self) -> Option<FetchRequest> {
        if self.query.is_empty() {
            return None;
        }

        self.search_performed = false;
        self.load_more_loading = false;
        self.error_msg.clear();
        self.loading = true;
        self.scroll_offset = 0;

        Some(self.next_request(self.query.clone(), 1))
    }

    /// Begins fetching the next result page.
    ///
    /// Returns the tagged fetch to dispatch, or `None` when pagination is not
    /// possible: no search has completed yet, the current page is already the
    /// last one, or another fetch is still in flight (single in-flight
    /// discipline). The guard also covers a programmatic call on the last
    /// page, so a redundant fetch is never issued.
    ///
    /// The page counter itself is not advanced here; it moves when the
    /// completion is applied, so a failed load-more can simply be retried.
    pub fn begin_load_more(&mut self) -> Option<FetchRequest> {
        if !self.search_performed
            || self.loading
            || self.load_more_loading
            || self.page >= self.total_pages
        {
            return None;
        }

        self.load_more_loading = true;

        Some(self.next_request(self.submitted_query.clone(), self.page + 1))
    }

    /// Folds a fetch completion into state.
    ///
    /// Returns `false` without touching any state when the completion is
    /// stale, i.e. its id is not the latest dispatched one. This closes the
    /// race between overlapping fetches: only the most recent request's
    /// results ever apply, regardless of arrival order.
    ///
    /// On success the result set is replaced (page 1) or extended (later
    /// pages), pagination and the displayed query are updated from the
    /// completed request, the loading flags drop and `search_performed` is
    /// set. On failure only the error message and loading flags change; the
    /// result set, total pages and page survive so the previous results stay
    /// on screen.
    pub fn apply_fetch(&mut self, request: &FetchRequest, outcome: FetchOutcome) -> bool {
        if request.id != self.latest_request {
            tracing::debug!(
                request_id = request.id,
                latest_request = self.latest_request,
                "discarding stale fetch completion"
            );
            return false;
        }

        match outcome {
            FetchOutcome::Success(response) => {
                tracing::debug!(
                    page = request.page,
                    result_count = response.results.len(),
                    total_pages = response.total_pages,
                    "fetch completed"
                );

                if request.page == 1 {
                    self.images = response.results;
                    self.scroll_offset = 0;
                } else {
                    self.images.extend(response.results);
                }

                self.page = request.page;
                self.total_pages = response.total_pages;
                self.submitted_query.clone_from(&request.query);
                self.loading = false;
                self.load_more_loading = false;
                self.search_performed = true;
                self.error_msg.clear();
            }
            FetchOutcome::Failure(cause) => {
                tracing::debug!(page = request.page, cause = %cause, "fetch failed");

                self.error_msg = FETCH_ERROR_MSG.to_string();
                self.loading = false;
                self.load_more_loading = false;
            }
        }

        true
    }

    /// Whether further pagination is possible for the submitted query.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.search_performed && self.page < self.total_pages
    }

    /// Scrolls the result list down by one row.
    ///
    /// No-op when the result set is empty. The offset is clamped against the
    /// visible window during view model computation.
    pub fn scroll_down(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.scroll_offset = (self.scroll_offset + 1).min(self.images.len() - 1);
    }

    /// Scrolls the result list up by one row.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Allocates the next fetch id and builds the tagged request.
    fn next_request(&mut self, query: String, page: u32) -> FetchRequest {
        self.latest_request += 1;
        FetchRequest {
            id: self.latest_request,
            query,
            page,
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing the slice of results around the scroll
    /// offset), column truncation against the terminal width, and the
    /// conditional UI elements: search box, result header, error line,
    /// loading indicator, empty state and load-more affordance.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let search_bar = (self.input_mode == InputMode::Search).then(|| SearchBarInfo {
            query: self.query.clone(),
        });

        let result_header = self.search_performed.then(|| ResultHeader {
            query: self.submitted_query.clone(),
            count_label: format!("{} images found", self.total_pages * IMAGES_PER_PAGE),
        });

        let error = (!self.error_msg.is_empty()).then(|| self.error_msg.clone());

        let empty_state = (self.search_performed && self.images.is_empty() && !self.loading)
            .then(|| EmptyState {
                message: "No images found".to_string(),
                subtitle: "Try a different search".to_string(),
            });

        let load_more = self.can_load_more().then(|| LoadMoreInfo {
            in_flight: self.load_more_loading,
        });

        let items = if self.loading {
            vec![]
        } else {
            self.compute_visible_items(rows, cols, search_bar.is_some(), error.is_some())
        };

        UIViewModel {
            items,
            search_bar,
            result_header,
            error,
            loading: self.loading,
            empty_state,
            load_more,
            footer: self.compute_footer(),
        }
    }

    /// Windows the result set to the rows available on screen.
    fn compute_visible_items(
        &self,
        rows: usize,
        cols: usize,
        with_search_bar: bool,
        with_error: bool,
    ) -> Vec<ImageItem> {
        let available = self.calculate_available_rows(rows, with_search_bar, with_error);
        if available == 0 {
            return vec![];
        }

        let visible_start = self
            .scroll_offset
            .min(self.images.len().saturating_sub(available));
        let visible_end = (visible_start + available).min(self.images.len());

        let url_width = cols.saturating_sub(DESCRIPTION_COLUMN_WIDTH + COLUMN_GAP);

        self.images[visible_start..visible_end]
            .iter()
            .map(|image| ImageItem {
                description: crate::ui::helpers::truncate_text(
                    image.display_text(),
                    DESCRIPTION_COLUMN_WIDTH,
                ),
                url: crate::ui::helpers::truncate_text(&image.urls.small, url_width),
            })
            .collect()
    }

    /// Computes footer keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Enter: search  ESC: cancel  Type to edit query".to_string(),
            InputMode::Normal if self.can_load_more() => {
                "j/k: scroll  m: load more  /: search  q: quit".to_string()
            }
            InputMode::Normal => "j/k: scroll  /: search  q: quit".to_string(),
        };

        FooterInfo { keybindings }
    }

    /// Calculates rows available for result items after subtracting UI chrome.
    ///
    /// Chrome accounting: blank top line, title, border, optional search box
    /// (3 rows), optional result header (2 rows), optional error line, column
    /// headers, optional load-more line, bottom border and footer.
    fn calculate_available_rows(
        &self,
        total_rows: usize,
        with_search_bar: bool,
        with_error: bool,
    ) -> usize {
        let mut chrome = 6;
        if with_search_bar {
            chrome += 3;
        }
        if self.search_performed {
            chrome += 2;
        }
        if with_error {
            chrome += 1;
        }
        if self.can_load_more() {
            chrome += 1;
        }
        total_rows.saturating_sub(chrome)
    }
}
