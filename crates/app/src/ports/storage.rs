//! Storage port: repository trait for persistence.

use std::future::Future;

use moviehub_domain::error::MoviehubError;
use moviehub_domain::record::Record;

/// Repository for persisting [`Record`]s.
pub trait RecordRepository {
    /// Write a record, replacing any existing record with the same id.
    fn put(&self, record: Record) -> impl Future<Output = Result<Record, MoviehubError>> + Send;
}

impl<T: RecordRepository + Send + Sync> RecordRepository for std::sync::Arc<T> {
    fn put(&self, record: Record) -> impl Future<Output = Result<Record, MoviehubError>> + Send {
        (**self).put(record)
    }
}
