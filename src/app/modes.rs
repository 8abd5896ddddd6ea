//! Input mode state for the application.
//!
//! The plugin operates in one of two input modes that determine how
//! keystrokes are interpreted and whether the search input box is shown:
//!
//! - **Search**: keystrokes edit the query, Enter submits it
//! - **Normal**: keystrokes scroll the result list and trigger commands

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search box is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (scroll), m (load more), / (edit query),
    /// q (quit).
    Normal,

    /// The search input box has focus.
    ///
    /// Printable characters and backspace edit the query, Enter submits it,
    /// Esc returns to normal mode without submitting.
    Search,
}
