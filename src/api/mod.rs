//! External interface to the photo-search HTTP API.
//!
//! The plugin talks to exactly one REST endpoint. This module defines the
//! request/response types for it and the helpers that build tagged requests
//! and decode responses; the actual HTTP round-trip is performed by the host
//! via `web_request` in the plugin shim.

pub mod search;

pub use search::{
    parse_response, FetchOutcome, FetchRequest, SearchResponse, API_URL, IMAGES_PER_PAGE,
};
