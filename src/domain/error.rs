//! Error types for the Zplash plugin.
//!
//! This module defines the centralized error type [`ZplashError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Every failure on the fetch path (transport, non-2xx status, malformed payload)
//! is collapsed into a single generic user-facing message at the controller
//! boundary; these variants exist so the underlying cause can still be traced.

use thiserror::Error;

/// The main error type for Zplash plugin operations.
///
/// This enum consolidates the error conditions that can occur on the fetch
/// path. Both variants carry the underlying cause as a string so it survives
/// the trip into tracing attributes.
#[derive(Debug, Error)]
pub enum ZplashError {
    /// The search endpoint returned a non-success status.
    ///
    /// Covers authentication failures (bad or missing API key), rate limiting
    /// and server errors alike. The string contains the status description.
    #[error("API error: {0}")]
    Api(String),

    /// The response payload could not be decoded.
    ///
    /// Occurs when the search endpoint returns a body that does not match the
    /// expected JSON shape. The string contains the decoder's description.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// A specialized `Result` type for Zplash operations.
///
/// This is a type alias for `std::result::Result<T, ZplashError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZplashError>;
