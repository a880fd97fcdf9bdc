//! # moviehub-adapter-storage-dynamodb
//!
//! `DynamoDB` persistence adapter using [aws-sdk-dynamodb](https://docs.rs/aws-sdk-dynamodb).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `moviehub-app::ports::storage`
//! - Build the `DynamoDB` client once from the shared AWS configuration
//! - Map between domain records and `DynamoDB` attribute maps
//!
//! ## Dependency rule
//! Depends on `moviehub-app` (for port traits) and `moviehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod config;
pub mod error;
pub mod item;
pub mod record_repo;

pub use config::{Config, TABLE_NAME_ENV};
pub use record_repo::DynamoRecordRepository;
