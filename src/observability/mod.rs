//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin, writing spans
//! to a JSON-lines file for offline analysis. The plugin runs inside Zellij's
//! WASM sandbox, so there is no network transport; a custom exporter writes
//! directly into the plugin's data directory instead.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` plugin config option, defaulting
//! to `"info"`. Spans land in
//! `~/.local/share/zellij/zplash/zplash-traces.json`, rotated once at 10MB.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`export`]: File-based span exporter with size-capped rotation

mod export;
mod init;

pub use init::init_tracing;
