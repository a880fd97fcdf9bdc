//! Error-to-response mapping.

use serde_json::json;

use moviehub_domain::error::MoviehubError;

use crate::response::ApiGatewayProxyResponse;

/// Maps [`MoviehubError`] to a response or an invocation failure.
pub struct ApiError(MoviehubError);

impl From<MoviehubError> for ApiError {
    fn from(err: MoviehubError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Validation errors become a `400` response. Storage and configuration
    /// errors are handed back so the platform reports a failed invocation;
    /// the use-case has already logged them as `WRITE_FAILED`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error unless it is a validation error.
    pub fn into_response(self) -> Result<ApiGatewayProxyResponse, MoviehubError> {
        match self.0 {
            MoviehubError::Validation(err) => Ok(ApiGatewayProxyResponse::json(
                400,
                &json!({ "error": err.to_string() }),
            )),
            other => Err(other),
        }
    }
}
