//! Footer component renderers.
//!
//! This module renders the bottom chrome: the load-more affordance line and
//! the footer help bar with centered keybinding hints.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, LoadMoreInfo};

/// Renders the load-more affordance line.
///
/// Only invoked while further pages exist (`page < total_pages`); shows a
/// loading marker instead of the hint while the next page is in flight.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_load_more(row: usize, load_more: &LoadMoreInfo, theme: &Theme, cols: usize) -> usize {
    let text = if load_more.in_flight {
        "Loading..."
    } else {
        "m: load more"
    };
    let padding = (cols.saturating_sub(text.len())) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling,
/// padding the line to fill the entire terminal width. Text exceeding the
/// terminal width is truncated to prevent layout corruption.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.len().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
