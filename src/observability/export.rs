//! File-based OpenTelemetry span export.
//!
//! Implements a custom `SpanExporter` that serializes spans to compact JSON
//! lines and appends them to a file, rotating once when the file exceeds a
//! size cap. This keeps traces available for offline inspection inside
//! Zellij's sandbox, where no network exporter can run.

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::Value;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum trace file size before rotation (10MB).
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File-based OpenTelemetry span exporter.
///
/// Writes each span as one JSON line. When the file exceeds [`MAX_FILE_SIZE`]
/// it is renamed to `<name>.old` (replacing any previous backup) and a fresh
/// file is started.
struct FileSpanExporter {
    file_path: PathBuf,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Rotates the trace file if it has grown past the size cap.
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        let size = match std::fs::metadata(&self.file_path) {
            Ok(metadata) => metadata.len(),
            Err(_) => return Ok(()), // File doesn't exist yet
        };
        if size < MAX_FILE_SIZE {
            return Ok(());
        }

        let mut backup = self.file_path.clone();
        backup.set_extension("json.old");
        std::fs::rename(&self.file_path, &backup)
    }

    /// Appends one JSON line per span in the batch.
    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        for span in batch {
            let line = format_span(span);
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}

/// Serializes a single span to a compact JSON object.
///
/// Captures identity (trace/span ids), name, timing as unix nanoseconds, and
/// all recorded attributes.
fn format_span(span: &SpanData) -> serde_json::Value {
    let attributes: serde_json::Map<String, serde_json::Value> = span
        .attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "name": span.name.as_ref(),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes,
    })
}

fn attribute_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::json!(b),
        Value::I64(i) => serde_json::json!(i),
        Value::F64(f) => serde_json::json!(f),
        Value::String(s) => serde_json::json!(s.to_string()),
        Value::Array(_) => serde_json::json!(format!("{value:?}")),
    }
}

/// Nanoseconds since the Unix epoch, as a string (the values exceed JSON's
/// safe integer range).
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        match self.write_batch(&batch) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file_path", &self.file_path)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider with file-based export.
///
/// Uses the simple (immediate, non-batched) export strategy so spans land on
/// disk as soon as they close.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
