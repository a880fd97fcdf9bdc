//! Typed structured-log records emitted once per handler phase.
//!
//! Every entry carries the same base context (request id, function name,
//! caller metadata) plus a fixed set of named, optional phase fields.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use moviehub_domain::time::{self, Timestamp};

use crate::invocation::{CallerIdentity, InvocationContext};

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler phase a [`LogEntry`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    RequestReceived,
    PayloadParsed,
    DefaultPayload,
    ValidationFailed,
    WriteFailed,
    DataInserted,
}

impl EventType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequestReceived => "REQUEST_RECEIVED",
            Self::PayloadParsed => "PAYLOAD_PARSED",
            Self::DefaultPayload => "DEFAULT_PAYLOAD",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::WriteFailed => "WRITE_FAILED",
            Self::DataInserted => "DATA_INSERTED",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base fields shared by every entry of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    request_id: String,
    function_name: String,
    source_ip: Option<String>,
    user_agent: Option<String>,
}

impl LogContext {
    #[must_use]
    pub fn new(context: &InvocationContext, caller: &CallerIdentity) -> Self {
        Self {
            request_id: context.request_id.clone(),
            function_name: context.function_name.clone(),
            source_ip: caller.source_ip.clone(),
            user_agent: caller.user_agent.clone(),
        }
    }

    /// Start an entry stamped with the current time.
    #[must_use]
    pub fn entry(&self, level: LogLevel, event_type: EventType, message: &str) -> LogEntry {
        LogEntry {
            timestamp: time::now(),
            level,
            event_type,
            message: message.to_string(),
            request_id: self.request_id.clone(),
            function_name: self.function_name.clone(),
            source_ip: self.source_ip.clone(),
            user_agent: self.user_agent.clone(),
            table_name: None,
            has_body: None,
            payload: None,
            item_id: None,
            error: None,
        }
    }
}

/// One structured log line.
///
/// `sourceIp` and `userAgent` serialize as `null` when unknown; phase fields
/// are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: Timestamp,
    pub level: LogLevel,
    pub event_type: EventType,
    pub message: String,
    pub request_id: String,
    pub function_name: String,
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_body: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogEntry {
    #[must_use]
    pub fn with_table_name(mut self, table_name: Option<&str>) -> Self {
        self.table_name = table_name.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_has_body(mut self, has_body: bool) -> Self {
        self.has_body = Some(has_body);
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    #[must_use]
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Attach an error, flattening its source chain into one line.
    #[must_use]
    pub fn with_error(mut self, error: &(dyn std::error::Error + 'static)) -> Self {
        let mut text = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        self.error = Some(text);
        self
    }

    /// Render the entry as a single-line JSON object.
    #[must_use]
    pub fn to_json_line(&self) -> String {
        // Every field is a string, bool, or already a JSON value, so this
        // cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time::to_iso8601(ts))
}
