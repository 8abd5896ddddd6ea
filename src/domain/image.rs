//! Image domain model.
//!
//! This module defines the core [`Image`] type representing one photo record
//! returned by the search endpoint. Images are immutable once received; the
//! plugin only accumulates them into the result set and reads them for display.

use serde::{Deserialize, Serialize};

/// Fallback display text for images without a description.
const UNTITLED: &str = "(untitled)";

/// One photo record from the search endpoint.
///
/// Deserialized directly from the API response shape. Only the fields the
/// plugin displays are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier assigned by the API.
    pub id: String,

    /// Resolution variants of the photo. Only the small variant is used.
    pub urls: ImageUrls,

    /// Optional textual description of the photo contents.
    ///
    /// The API omits or nulls this field for many photos.
    #[serde(default)]
    pub alt_description: Option<String>,
}

/// URL variants for a photo.
///
/// The API returns several sizes; the plugin only ever requests and displays
/// the small one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    /// URL of the small-resolution rendition.
    pub small: String,
}

impl Image {
    /// Returns the display text for this image.
    ///
    /// Falls back to a fixed placeholder when the API provided no description.
    ///
    /// # Examples
    ///
    /// ```
    /// use zplash::domain::{Image, ImageUrls};
    ///
    /// let image = Image {
    ///     id: "abc123".to_string(),
    ///     urls: ImageUrls { small: "https://example.com/abc123_s.jpg".to_string() },
    ///     alt_description: None,
    /// };
    /// assert_eq!(image.display_text(), "(untitled)");
    /// ```
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self.alt_description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => UNTITLED,
        }
    }
}
