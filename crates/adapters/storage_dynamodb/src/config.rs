//! `DynamoDB` client setup.

use aws_config::{BehaviorVersion, Region};

use crate::record_repo::DynamoRecordRepository;

/// Environment variable naming the destination table.
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// Configuration for the `DynamoDB` storage adapter.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Destination table. Left unset, every write fails with a
    /// configuration error.
    pub table_name: Option<String>,
    /// Endpoint override (e.g. `DynamoDB` Local).
    pub endpoint_url: Option<String>,
    /// Region override; the SDK default chain applies otherwise.
    pub region: Option<String>,
}

impl Config {
    /// Load the shared AWS configuration and build the repository.
    ///
    /// Credentials are resolved lazily by the SDK, so this never fails;
    /// problems surface on the first write.
    pub async fn build(self) -> DynamoRecordRepository {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = self.endpoint_url {
            tracing::debug!(%endpoint, "using DynamoDB endpoint override");
            builder = builder.endpoint_url(endpoint);
        }

        let client = aws_sdk_dynamodb::Client::from_conf(builder.build());
        DynamoRecordRepository::new(client, self.table_name)
    }
}
