//! `DynamoDB` implementation of [`RecordRepository`].

use std::future::Future;

use aws_sdk_dynamodb::Client;

use moviehub_app::ports::RecordRepository;
use moviehub_domain::error::{ConfigurationError, MoviehubError};
use moviehub_domain::record::Record;

use crate::config::TABLE_NAME_ENV;
use crate::error::StorageError;
use crate::item;

/// `DynamoDB`-backed record repository.
///
/// Holds one client for the lifetime of the execution environment; the
/// client is cheap to clone and shares its connection pool.
#[derive(Clone)]
pub struct DynamoRecordRepository {
    client: Client,
    table_name: Option<String>,
}

impl std::fmt::Debug for DynamoRecordRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoRecordRepository")
            .field("table_name", &self.table_name)
            .finish_non_exhaustive()
    }
}

impl DynamoRecordRepository {
    /// Create a new repository from a pre-built client.
    ///
    /// An empty table name counts as unset.
    #[must_use]
    pub fn new(client: Client, table_name: Option<String>) -> Self {
        Self {
            client,
            table_name: table_name.filter(|name| !name.is_empty()),
        }
    }

    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }
}

impl RecordRepository for DynamoRecordRepository {
    fn put(&self, record: Record) -> impl Future<Output = Result<Record, MoviehubError>> + Send {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        async move {
            let table_name =
                table_name.ok_or(ConfigurationError::MissingSetting(TABLE_NAME_ENV))?;

            client
                .put_item()
                .table_name(table_name)
                .set_item(Some(item::to_item(&record)))
                .send()
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }
}
