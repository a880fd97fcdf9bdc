//! Storage-specific error type wrapping `DynamoDB` SDK errors.

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;

use moviehub_domain::error::MoviehubError;

/// Errors originating from the `DynamoDB` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The `PutItem` call failed (throttling, permissions, network, …).
    #[error("put item failed")]
    PutItem(#[from] SdkError<PutItemError>),
}

impl From<StorageError> for MoviehubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
