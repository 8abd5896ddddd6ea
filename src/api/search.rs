//! Search endpoint request construction and response decoding.
//!
//! This module owns the external interface to the photo-search API: building
//! the request URL for a given query and page, tagging each dispatched fetch
//! with a monotonically increasing request id, and decoding the JSON response.
//!
//! # Request identity
//!
//! Fetches are dispatched through the host's `web_request` call and complete
//! asynchronously, in arrival order rather than dispatch order. Each
//! [`FetchRequest`] therefore carries an id captured at dispatch time; the id
//! round-trips through the host in the request context map so that a
//! completion can be matched against the latest dispatched fetch and stale
//! completions can be discarded.

use crate::domain::{Image, Result, ZplashError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use urlencoding::encode;

/// Photo-search endpoint.
pub const API_URL: &str = "https://api.unsplash.com/search/photos";

/// Fixed page size for every search request.
pub const IMAGES_PER_PAGE: u32 = 8;

/// Context map key carrying the request id through the host round-trip.
const CONTEXT_REQUEST_ID: &str = "request_id";
/// Context map key carrying the query text through the host round-trip.
const CONTEXT_QUERY: &str = "query";
/// Context map key carrying the page index through the host round-trip.
const CONTEXT_PAGE: &str = "page";

/// One outbound fetch, captured at dispatch time.
///
/// The query is read from the input field when the fetch is dispatched, so a
/// completion always applies the query it was issued for even if the user has
/// edited the input since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Monotonically increasing sequence number, unique per dispatched fetch.
    pub id: u64,

    /// Search text sent with this fetch.
    pub query: String,

    /// 1-based page index requested.
    pub page: u32,
}

impl FetchRequest {
    /// Builds the full request URL for this fetch.
    ///
    /// The query text is URL-encoded; `page`, `per_page` and the `client_id`
    /// credential are passed as plain query parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use zplash::api::FetchRequest;
    ///
    /// let request = FetchRequest { id: 1, query: "red cats".to_string(), page: 2 };
    /// let url = request.request_url("secret");
    /// assert_eq!(
    ///     url,
    ///     "https://api.unsplash.com/search/photos?query=red%20cats&page=2&per_page=8&client_id=secret"
    /// );
    /// ```
    #[must_use]
    pub fn request_url(&self, api_key: &str) -> String {
        format!(
            "{API_URL}?query={}&page={}&per_page={IMAGES_PER_PAGE}&client_id={api_key}",
            encode(&self.query),
            self.page,
        )
    }

    /// Serializes this fetch into a `web_request` context map.
    ///
    /// The host echoes the context back unchanged with the response, which is
    /// how a completion is matched to the fetch that produced it.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_REQUEST_ID.to_string(), self.id.to_string());
        context.insert(CONTEXT_QUERY.to_string(), self.query.clone());
        context.insert(CONTEXT_PAGE.to_string(), self.page.to_string());
        context
    }

    /// Reconstructs a fetch from a response context map.
    ///
    /// Returns `None` when the context is missing or malformed, which happens
    /// for web responses the plugin did not dispatch.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let id = context.get(CONTEXT_REQUEST_ID)?.parse().ok()?;
        let query = context.get(CONTEXT_QUERY)?.clone();
        let page = context.get(CONTEXT_PAGE)?.parse().ok()?;
        Some(Self { id, query, page })
    }
}

/// Decoded body of a successful search response.
///
/// Mirrors the endpoint's JSON shape: `{ results: [...], total_pages: n }`.
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Photo records for the requested page, in API order.
    pub results: Vec<Image>,

    /// Total number of pages available for the query.
    ///
    /// Zero when the query matched nothing. Used to decide whether further
    /// pagination is possible and to compute the displayed result count.
    pub total_pages: u32,
}

/// Outcome of a completed fetch, as applied to application state.
///
/// The failure string is the underlying cause for tracing; the user only ever
/// sees the fixed generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint returned a decodable success response.
    Success(SearchResponse),

    /// Transport error, non-2xx status or malformed payload.
    Failure(String),
}

/// Decodes a raw web response into a [`SearchResponse`].
///
/// # Errors
///
/// - [`ZplashError::Api`] when the status is outside the 2xx range (covers
///   auth failures, rate limiting and server errors alike)
/// - [`ZplashError::Decode`] when the body is not the expected JSON shape
pub fn parse_response(status: u16, body: &[u8]) -> Result<SearchResponse> {
    if !(200..300).contains(&status) {
        return Err(ZplashError::Api(format!(
            "search endpoint returned status {status}"
        )));
    }

    serde_json::from_slice(body).map_err(|e| ZplashError::Decode(e.to_string()))
}
