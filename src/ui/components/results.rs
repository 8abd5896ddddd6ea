//! Result list component renderers.
//!
//! This module renders everything between the search box and the footer: the
//! result header (submitted query plus approximate count), the error line,
//! the two-column image list and the page-1 loading marker.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ImageItem, ResultHeader};

/// Width of the description column, matching view model truncation.
const DESCRIPTION_COLUMN_WIDTH: usize = 42;

/// Renders the result header: the submitted query and the count line.
///
/// Only invoked once a search has completed, so it never shows a query whose
/// results have not arrived.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_result_header(row: usize, header: &ResultHeader, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", header.query);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", header.count_label);
    print!("{}", Theme::reset());

    row + 2
}

/// Renders the fetch failure message line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_error(row: usize, message: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{message}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the column headers for the image list.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_column_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<DESCRIPTION_COLUMN_WIDTH$}  {}", "DESCRIPTION", "URL");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible image rows starting at the specified row.
///
/// Each row shows the truncated description in the fixed-width left column
/// and the small-resolution URL in the remaining width.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_image_rows(row: usize, items: &[ImageItem], theme: &Theme) -> usize {
    let mut current_row = row;
    for item in items {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{:<DESCRIPTION_COLUMN_WIDTH$}", item.description);
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.url_fg));
        print!("{}", item.url);
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders the centered loading marker shown while a page-1 fetch is in
/// flight.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_loading(row: usize, theme: &Theme, cols: usize) -> usize {
    let text = "Loading...";
    let padding = (cols.saturating_sub(text.len())) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
