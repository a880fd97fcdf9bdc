//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MoviehubError`] via `From`.

/// Top-level error for every moviehub operation.
#[derive(Debug, thiserror::Error)]
pub enum MoviehubError {
    /// The inbound request was malformed or incomplete.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A required setting is missing.
    #[error("configuration error")]
    Configuration(#[from] ConfigurationError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an inbound request is rejected before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The body is not valid JSON.
    #[error("request body is not valid JSON")]
    MalformedJson(#[source] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent (or `null`).
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field holds a value of the wrong JSON type.
    #[error("field `{field}` must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// The `year` field is not integer-valued.
    #[error("field `year` must be an integer, got `{0}`")]
    InvalidYear(String),

    /// The `id` field is empty.
    #[error("field `id` must not be empty")]
    EmptyId,

    /// The request carries no body and defaults are disabled.
    #[error("request body is required")]
    MissingBody,

    /// The body is flagged base64 but does not decode to UTF-8 text.
    #[error("request body is not valid base64-encoded UTF-8")]
    InvalidEncoding,
}

/// A setting required at runtime is not available.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The named setting (usually an environment variable) is unset.
    #[error("required setting `{0}` is not set")]
    MissingSetting(&'static str),
}
