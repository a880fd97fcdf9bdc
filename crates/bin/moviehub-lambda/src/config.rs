//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `moviehub.toml` in the working directory (or the path in
//! `MOVIEHUB_CONFIG`). Every field has a default so the file is optional;
//! on Lambda the environment alone is the usual source. Environment
//! variables take precedence over file values.

use serde::Deserialize;

use moviehub_adapter_lambda::logging::DEFAULT_FILTER;
use moviehub_adapter_storage_dynamodb::TABLE_NAME_ENV;
use moviehub_app::services::ingest_service::{IngestSettings, MissingBodyPolicy, UnknownPolicy};

const DEFAULT_PATH: &str = "moviehub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `DynamoDB` settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Request handling settings.
    pub handler: HandlerConfig,
}

/// `DynamoDB` configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Destination table name.
    pub table_name: Option<String>,
    /// Endpoint override, e.g. `http://localhost:8000` for `DynamoDB` Local.
    pub endpoint_url: Option<String>,
    /// Region override.
    pub region: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Request handling configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Behavior when a request carries no body.
    pub missing_body: MissingBodyPolicy,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("MOVIEHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup(TABLE_NAME_ENV) {
            self.storage.table_name = Some(val);
        }
        if let Some(val) = lookup("MOVIEHUB_DYNAMODB_ENDPOINT") {
            self.storage.endpoint_url = Some(val);
        }
        if let Some(val) = lookup("MOVIEHUB_REGION") {
            self.storage.region = Some(val);
        }
        if let Some(val) = lookup("MOVIEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("MOVIEHUB_MISSING_BODY") {
            self.handler.missing_body = val
                .parse()
                .map_err(|err: UnknownPolicy| ConfigError::Validation(err.to_string()))?;
        }
        if self
            .storage
            .table_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            self.storage.table_name = None;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.storage.endpoint_url {
            Some(endpoint)
                if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) =>
            {
                Err(ConfigError::Validation(format!(
                    "endpoint_url must start with http:// or https://, got `{endpoint}`"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Settings for the `DynamoDB` adapter.
    #[must_use]
    pub fn storage_config(&self) -> moviehub_adapter_storage_dynamodb::Config {
        moviehub_adapter_storage_dynamodb::Config {
            table_name: self.storage.table_name.clone(),
            endpoint_url: self.storage.endpoint_url.clone(),
            region: self.storage.region.clone(),
        }
    }

    /// Settings for the ingest use-case.
    #[must_use]
    pub fn ingest_settings(&self) -> IngestSettings {
        IngestSettings {
            table_name: self.storage.table_name.clone(),
            missing_body: self.handler.missing_body,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
