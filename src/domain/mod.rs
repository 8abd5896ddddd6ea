//! Core domain types for the Zplash plugin.
//!
//! This module contains the fundamental data types used throughout the plugin:
//!
//! - [`Image`]: One photo record received from the search endpoint
//! - [`ZplashError`]: Centralized error type for all plugin operations
//! - [`Result`]: Type alias for plugin results
//!
//! Domain types are independent of the UI and the Zellij host; they carry no
//! rendering or transport concerns.

pub mod error;
pub mod image;

pub use error::{Result, ZplashError};
pub use image::{Image, ImageUrls};
