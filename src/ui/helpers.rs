//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! width-aware text truncation. Truncation operates on character counts, not
//! bytes, so multi-byte descriptions never split mid-character.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to a maximum display width, appending "..." when cut.
///
/// Returns the input unchanged when it already fits. Widths of three or fewer
/// characters degrade to a plain cut without the ellipsis.
#[must_use]
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return chars[..max_width].iter().collect();
    }

    let mut truncated: String = chars[..max_width - 3].iter().collect();
    truncated.push_str("...");
    truncated
}
