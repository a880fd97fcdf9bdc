//! Invocation log port: where per-phase log entries go.

use crate::logging::LogEntry;

/// Receives one [`LogEntry`] per handler phase, in emission order.
///
/// Recording is infallible: a logging sink must never fail an invocation.
pub trait InvocationLog {
    fn record(&self, entry: &LogEntry);
}

impl<T: InvocationLog> InvocationLog for std::sync::Arc<T> {
    fn record(&self, entry: &LogEntry) {
        (**self).record(entry);
    }
}
