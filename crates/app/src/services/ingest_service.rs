//! Ingest service: the request-handler use-case.
//!
//! One call decodes and parses the body (or falls back to the default
//! record), writes one record, and reports every phase to the
//! [`InvocationLog`].

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use moviehub_domain::error::{MoviehubError, ValidationError};
use moviehub_domain::id::RecordId;
use moviehub_domain::record::Record;

use crate::invocation::{IngestRequest, InvocationContext};
use crate::logging::{EventType, LogContext, LogLevel};
use crate::ports::{InvocationLog, RecordRepository};

/// What to do when a request arrives without a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingBodyPolicy {
    /// Write the fixed default record under a generated id.
    #[default]
    InsertDefault,
    /// Reject the request with [`ValidationError::MissingBody`].
    Reject,
}

/// Unrecognised [`MissingBodyPolicy`] name.
#[derive(Debug, thiserror::Error)]
#[error("unknown missing-body policy `{0}` (expected `insert_default` or `reject`)")]
pub struct UnknownPolicy(String);

impl FromStr for MissingBodyPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "insert_default" => Ok(Self::InsertDefault),
            "reject" => Ok(Self::Reject),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Static settings of the ingest use-case.
#[derive(Debug, Clone, Default)]
pub struct IngestSettings {
    /// Destination table, reported in the `REQUEST_RECEIVED` entry.
    pub table_name: Option<String>,
    pub missing_body: MissingBodyPolicy,
}

/// Result of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub record: Record,
    /// `true` when the default record was written.
    pub defaulted: bool,
}

/// Application service that turns one request into one stored record.
pub struct RecordIngestService<R, L> {
    repo: R,
    log: L,
    settings: IngestSettings,
}

impl<R, L> RecordIngestService<R, L>
where
    R: RecordRepository,
    L: InvocationLog,
{
    /// Create a new service backed by the given repository and log sink.
    pub fn new(repo: R, log: L, settings: IngestSettings) -> Self {
        Self {
            repo,
            log,
            settings,
        }
    }

    /// Handle one request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`MoviehubError::Validation`] when the body is malformed or
    /// incomplete (nothing is written), or the repository's storage or
    /// configuration error when the write fails.
    #[tracing::instrument(skip_all, fields(request_id = %context.request_id))]
    pub async fn ingest(
        &self,
        request: &IngestRequest,
        context: &InvocationContext,
    ) -> Result<IngestOutcome, MoviehubError> {
        let log = LogContext::new(context, &request.caller);

        self.log.record(
            &log.entry(
                LogLevel::Info,
                EventType::RequestReceived,
                "Processing API request",
            )
            .with_table_name(self.settings.table_name.as_deref())
            .with_has_body(request.non_empty_body().is_some()),
        );

        let resolved = request
            .decoded_body()
            .and_then(|body| self.resolve(body.as_deref(), &log));
        let (record, defaulted) = match resolved {
            Ok(resolved) => resolved,
            Err(err) => {
                self.log.record(
                    &log.entry(
                        LogLevel::Warn,
                        EventType::ValidationFailed,
                        "Rejected request payload",
                    )
                    .with_error(&err),
                );
                return Err(err.into());
            }
        };

        let id = record.id.clone();
        let record = match self.repo.put(record).await {
            Ok(record) => record,
            Err(err) => {
                self.log.record(
                    &log.entry(LogLevel::Error, EventType::WriteFailed, "Failed to insert data")
                        .with_item_id(id.as_str())
                        .with_error(&err),
                );
                return Err(err);
            }
        };

        let message = if defaulted {
            "Successfully inserted default data"
        } else {
            "Successfully inserted data"
        };
        self.log.record(
            &log.entry(LogLevel::Info, EventType::DataInserted, message)
                .with_item_id(record.id.as_str()),
        );

        Ok(IngestOutcome { record, defaulted })
    }

    fn resolve(
        &self,
        body: Option<&str>,
        log: &LogContext,
    ) -> Result<(Record, bool), ValidationError> {
        match body {
            Some(text) => {
                let payload: Value =
                    serde_json::from_str(text).map_err(ValidationError::MalformedJson)?;
                let record = Record::from_payload(&payload);
                self.log.record(
                    &log.entry(LogLevel::Info, EventType::PayloadParsed, "Received payload")
                        .with_payload(payload),
                );
                Ok((record?, false))
            }
            None => match self.settings.missing_body {
                MissingBodyPolicy::Reject => Err(ValidationError::MissingBody),
                MissingBodyPolicy::InsertDefault => {
                    self.log.record(&log.entry(
                        LogLevel::Info,
                        EventType::DefaultPayload,
                        "Request without payload, using default",
                    ));
                    Ok((Record::default_with_id(RecordId::generate()), true))
                }
            },
        }
    }
}
