//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros through OpenTelemetry to the file-based span
//! exporter.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based span export.
///
/// Level comes from `config.trace_level`, defaulting to `"info"`. Traces are
/// written to `<data dir>/zplash-traces.json`, which maps to
/// `~/.local/share/zellij/zplash/` in Zellij's sandbox environment.
///
/// Silently does nothing if the data directory cannot be created
/// (observability is optional), and is safe to call multiple times (only the
/// first call installs a subscriber).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "Zplash")]);

    let trace_file = data_dir.join("zplash-traces.json");
    let provider = export::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("Zplash");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
