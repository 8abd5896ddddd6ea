//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different UI
//! elements and the top-level layout function that stitches them together.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box (border, query text)
//! - [`results`]: Result header, error line, column headers, image rows,
//!   loading marker
//! - [`empty`]: Empty state message for zero-result searches
//! - [`footer`]: Load-more affordance and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, while editing]
//! [Result Header - 2 lines, once a search completed]
//! [Error line, after a failure]
//! [Column Headers]
//! [Image Rows | Loading | Empty State]
//! [Load More line, while further pages exist]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod results;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_load_more};
use header::render_header;
use results::{
    render_column_headers, render_error, render_image_rows, render_loading, render_result_header,
};
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/content, content/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the complete plugin layout from a view model.
///
/// Conditional elements (search box, result header, error line, empty state,
/// load-more line) are drawn only when present in the view model; the bottom
/// chrome is anchored to the last terminal rows.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(result_header) = &vm.result_header {
        current_row = render_result_header(current_row, result_header, theme);
    }

    if let Some(error) = &vm.error {
        current_row = render_error(current_row, error, theme);
    }

    current_row = render_column_headers(current_row, theme);

    if vm.loading {
        let _current_row = render_loading(current_row + 2, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        let _current_row = render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        let _current_row = render_image_rows(current_row, &vm.items, theme);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(load_more) = &vm.load_more {
        render_load_more(border_row.saturating_sub(1), load_more, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
