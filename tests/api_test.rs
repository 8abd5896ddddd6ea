//! Tests for request construction, response decoding, configuration parsing
//! and theme loading.

use std::collections::BTreeMap;
use std::io::Write;

use zplash::api::{parse_response, FetchRequest, API_URL, IMAGES_PER_PAGE};
use zplash::domain::{Image, ImageUrls, ZplashError};
use zplash::{Config, Theme};

#[test]
fn request_url_encodes_the_query() {
    let request = FetchRequest {
        id: 7,
        query: "red cats & dogs".to_string(),
        page: 2,
    };

    let url = request.request_url("secret-key");

    assert!(url.starts_with(API_URL));
    assert!(url.contains("query=red%20cats%20%26%20dogs"));
    assert!(url.contains("page=2"));
    assert!(url.contains(&format!("per_page={IMAGES_PER_PAGE}")));
    assert!(url.ends_with("client_id=secret-key"));
}

#[test]
fn fetch_request_round_trips_through_the_context_map() {
    let request = FetchRequest {
        id: 42,
        query: "mountains".to_string(),
        page: 3,
    };

    let context = request.to_context();
    let restored = FetchRequest::from_context(&context).expect("context should round-trip");

    assert_eq!(restored, request);
}

#[test]
fn unrecognized_context_maps_are_rejected() {
    assert!(FetchRequest::from_context(&BTreeMap::new()).is_none());

    let mut partial = BTreeMap::new();
    partial.insert("request_id".to_string(), "1".to_string());
    assert!(FetchRequest::from_context(&partial).is_none());

    let mut garbage = BTreeMap::new();
    garbage.insert("request_id".to_string(), "not-a-number".to_string());
    garbage.insert("query".to_string(), "cats".to_string());
    garbage.insert("page".to_string(), "1".to_string());
    assert!(FetchRequest::from_context(&garbage).is_none());
}

#[test]
fn parse_response_decodes_a_successful_payload() {
    let body = r#"{
        "total": 20,
        "total_pages": 3,
        "results": [
            {
                "id": "abc123",
                "urls": { "small": "https://images.example/abc123-small.jpg", "full": "https://images.example/abc123.jpg" },
                "alt_description": "a cat on a sofa",
                "likes": 12
            },
            {
                "id": "def456",
                "urls": { "small": "https://images.example/def456-small.jpg" },
                "alt_description": null
            }
        ]
    }"#;

    let response = parse_response(200, body.as_bytes()).expect("payload should decode");

    assert_eq!(response.total_pages, 3);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].id, "abc123");
    assert_eq!(response.results[0].display_text(), "a cat on a sofa");
    assert_eq!(response.results[1].display_text(), "(untitled)");
}

#[test]
fn parse_response_rejects_non_success_statuses() {
    let err = parse_response(401, b"{}").unwrap_err();
    assert!(matches!(err, ZplashError::Api(_)));

    let err = parse_response(500, b"").unwrap_err();
    assert!(matches!(err, ZplashError::Api(_)));
}

#[test]
fn parse_response_rejects_malformed_bodies() {
    let err = parse_response(200, b"not json at all").unwrap_err();
    assert!(matches!(err, ZplashError::Decode(_)));

    let err = parse_response(200, br#"{"results": "nope"}"#).unwrap_err();
    assert!(matches!(err, ZplashError::Decode(_)));
}

#[test]
fn empty_descriptions_fall_back_to_the_placeholder() {
    let image = Image {
        id: "x".to_string(),
        urls: ImageUrls {
            small: "https://images.example/x.jpg".to_string(),
        },
        alt_description: Some(String::new()),
    };

    assert_eq!(image.display_text(), "(untitled)");
}

#[test]
fn config_parses_from_zellij_map() {
    let mut map = BTreeMap::new();
    map.insert("api_key".to_string(), "secret".to_string());
    map.insert("theme".to_string(), "catppuccin-latte".to_string());
    map.insert("trace_level".to_string(), "debug".to_string());

    let config = Config::from_zellij(&map);

    assert_eq!(config.api_key, "secret");
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert!(config.theme_file.is_none());
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn config_defaults_for_missing_keys() {
    let config = Config::from_zellij(&BTreeMap::new());

    assert!(config.api_key.is_empty());
    assert!(config.theme_name.is_none());
    assert!(config.theme_file.is_none());
    assert!(config.trace_level.is_none());
}

#[test]
fn builtin_themes_load_by_name() {
    for name in [
        "catppuccin-mocha",
        "catppuccin-latte",
        "catppuccin-frappe",
        "catppuccin-macchiato",
    ] {
        let theme = Theme::from_name(name).expect("built-in theme should load");
        assert_eq!(theme.name, name);
    }

    assert!(Theme::from_name("no-such-theme").is_none());
}

#[test]
fn custom_theme_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r##"name = "custom"

[colors]
header_fg = "#ffffff"
text_normal = "#eeeeee"
text_dim = "#888888"
border = "#444444"
search_bar_border = "#ff00ff"
error_fg = "#ff0000"
accent_fg = "#ffff00"
empty_state_fg = "#0000ff"
url_fg = "#00ffff"
"##
    )
    .expect("write theme");

    let theme = Theme::from_file(file.path()).expect("theme file should parse");

    assert_eq!(theme.name, "custom");
    assert_eq!(theme.colors.accent_fg, "#ffff00");
    assert!(theme.colors.header_bg.is_none());
}

#[test]
fn invalid_theme_files_are_rejected() {
    assert!(Theme::from_file("/nonexistent/theme.toml").is_err());

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "name = \"broken\"").expect("write theme");
    assert!(Theme::from_file(file.path()).is_err());
}

#[test]
fn ansi_sequences_are_generated_from_hex_colors() {
    assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
    assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
    // Malformed hex degrades to white instead of panicking.
    assert_eq!(Theme::fg("#xyz"), "\u{001b}[38;2;255;255;255m");
    assert_eq!(Theme::reset(), "\u{001b}[0m");
}
