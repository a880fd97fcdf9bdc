//! JSON log sink for invocation entries, built on `tracing`.
//!
//! Each [`LogEntry`] becomes one `tracing` event on [`INVOCATION_TARGET`]
//! carrying the entry's own JSON line in its `entry` field. The subscriber
//! returned by [`subscriber`] writes that line verbatim, so `payload` stays a
//! nested object and unknown caller fields stay `null`. Every other event is
//! rendered by the stock JSON formatter as one flat object per line.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, JsonFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use moviehub_app::logging::{LogEntry, LogLevel};
use moviehub_app::ports::InvocationLog;

/// `tracing` target of every invocation entry.
pub const INVOCATION_TARGET: &str = "moviehub::invocation";

/// Filter used when nothing is configured.
pub const DEFAULT_FILTER: &str = "info";

const ENTRY_FIELD: &str = "entry";

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter directive")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global tracing subscriber is already installed")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Production [`InvocationLog`]: forwards entries to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInvocationLog;

macro_rules! emit {
    ($level:expr, $entry:expr) => {
        tracing::event!(
            target: INVOCATION_TARGET,
            $level,
            entry = $entry.to_json_line().as_str(),
            "{}",
            $entry.message
        )
    };
}

impl InvocationLog for TracingInvocationLog {
    fn record(&self, entry: &LogEntry) {
        match entry.level {
            LogLevel::Info => emit!(Level::INFO, entry),
            LogLevel::Warn => emit!(Level::WARN, entry),
            LogLevel::Error => emit!(Level::ERROR, entry),
        }
    }
}

/// Event formatter that prints invocation entries as-is and delegates the
/// rest to `inner`.
#[derive(Debug, Clone)]
pub struct InvocationFormat<F> {
    inner: F,
}

impl<S, N, F> FormatEvent<S, N> for InvocationFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'w> FormatFields<'w> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if event.metadata().target() == INVOCATION_TARGET {
            let mut visitor = EntryVisitor::default();
            event.record(&mut visitor);
            if let Some(line) = visitor.line {
                return writeln!(writer, "{line}");
            }
        }
        self.inner.format_event(ctx, writer, event)
    }
}

#[derive(Default)]
struct EntryVisitor {
    line: Option<String>,
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == ENTRY_FIELD {
            self.line = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == ENTRY_FIELD {
            self.line = Some(format!("{value:?}"));
        }
    }
}

/// Build the JSON-lines subscriber.
///
/// The timer is disabled because entries carry their own `timestamp` field;
/// span context and targets are dropped to keep the top-level keys fixed.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let inner = tracing_subscriber::fmt::format()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .without_time();

    tracing_subscriber::fmt()
        .fmt_fields(JsonFields::new())
        .event_format(InvocationFormat { inner })
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Install the JSON-lines subscriber on stdout as the global default.
///
/// # Errors
///
/// Returns [`LoggingError`] if `filter` is not a valid directive or a
/// subscriber is already installed.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing::subscriber::set_global_default(subscriber(filter, std::io::stdout))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviehub_app::invocation::{CallerIdentity, InvocationContext};
    use moviehub_app::logging::{EventType, LogContext};
    use serde_json::{Value, json};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn lines(&self) -> Vec<Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    fn capture(filter: &str, entries: &[LogEntry]) -> Vec<Value> {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = subscriber(EnvFilter::new(filter), move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            for entry in entries {
                TracingInvocationLog.record(entry);
            }
        });
        buffer.lines()
    }

    fn context() -> LogContext {
        LogContext::new(
            &InvocationContext::new("req-9", "ingest-fn"),
            &CallerIdentity {
                source_ip: Some("198.51.100.4".to_string()),
                user_agent: Some("curl/8.5.0".to_string()),
            },
        )
    }

    #[test]
    fn should_render_entry_as_flat_json_line() {
        let entry = context()
            .entry(LogLevel::Info, EventType::DataInserted, "Successfully inserted data")
            .with_item_id("abc");

        let lines = capture("info", &[entry]);

        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["message"], "Successfully inserted data");
        assert_eq!(line["eventType"], "DATA_INSERTED");
        assert_eq!(line["requestId"], "req-9");
        assert_eq!(line["functionName"], "ingest-fn");
        assert_eq!(line["sourceIp"], "198.51.100.4");
        assert_eq!(line["userAgent"], "curl/8.5.0");
        assert_eq!(line["itemId"], "abc");
        assert!(line["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(line.get("target").is_none());
        assert!(line.get("payload").is_none());
    }

    #[test]
    fn should_emit_entries_in_order() {
        let ctx = context();
        let entries = vec![
            ctx.entry(LogLevel::Info, EventType::RequestReceived, "Processing API request")
                .with_has_body(true),
            ctx.entry(LogLevel::Info, EventType::PayloadParsed, "Received payload")
                .with_payload(json!({"id": "abc", "year": 1999})),
            ctx.entry(LogLevel::Info, EventType::DataInserted, "Successfully inserted data"),
        ];

        let lines = capture("info", &entries);

        let types: Vec<&str> = lines
            .iter()
            .map(|line| line["eventType"].as_str().unwrap())
            .collect();
        assert_eq!(types, ["REQUEST_RECEIVED", "PAYLOAD_PARSED", "DATA_INSERTED"]);
        assert_eq!(lines[0]["hasBody"], true);

        assert_eq!(lines[1]["payload"]["year"], 1999);
        assert_eq!(lines[1]["payload"]["id"], "abc");
    }

    #[test]
    fn should_write_null_for_unknown_caller_fields() {
        let ctx = LogContext::new(
            &InvocationContext::new("req-10", "ingest-fn"),
            &CallerIdentity::default(),
        );
        let entry = ctx.entry(LogLevel::Info, EventType::RequestReceived, "Processing API request");

        let lines = capture("info", &[entry]);

        assert!(lines[0]["sourceIp"].is_null());
        assert!(lines[0]["userAgent"].is_null());
        assert!(lines[0].get("entry").is_none());
    }

    #[test]
    fn should_render_other_events_with_json_formatter() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = subscriber(EnvFilter::new("info"), move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(table_name = "movies", "moviehub-lambda ready");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "INFO");
        assert_eq!(lines[0]["message"], "moviehub-lambda ready");
        assert_eq!(lines[0]["table_name"], "movies");
        assert!(lines[0].get("target").is_none());
    }

    #[test]
    fn should_map_levels() {
        let ctx = context();
        let entries = vec![
            ctx.entry(LogLevel::Warn, EventType::ValidationFailed, "Rejected request payload"),
            ctx.entry(LogLevel::Error, EventType::WriteFailed, "Failed to insert data"),
        ];

        let lines = capture("info", &entries);

        assert_eq!(lines[0]["level"], "WARN");
        assert_eq!(lines[1]["level"], "ERROR");
    }

    #[test]
    fn should_respect_filter() {
        let ctx = context();
        let entries = vec![
            ctx.entry(LogLevel::Info, EventType::RequestReceived, "Processing API request"),
            ctx.entry(LogLevel::Warn, EventType::ValidationFailed, "Rejected request payload"),
        ];

        let lines = capture("warn", &entries);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["eventType"], "VALIDATION_FAILED");
    }

    #[test]
    fn should_reject_invalid_filter() {
        assert!(matches!(init("moviehub=loud"), Err(LoggingError::Filter(_))));
    }
}
