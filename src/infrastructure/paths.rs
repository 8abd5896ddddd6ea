//! Path utilities for Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory for Zplash trace output.
///
/// The directory is located at `/host/.local/share/zellij/zplash` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started if that's not available, so this
/// typically resolves to `~/.local/share/zellij/zplash`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zplash")
}
