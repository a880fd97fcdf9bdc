//! Inputs of a single handler invocation, independent of the gateway format.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use moviehub_domain::error::ValidationError;

/// Caller metadata forwarded by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Per-invocation execution metadata supplied by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_name: String,
}

impl InvocationContext {
    #[must_use]
    pub fn new(request_id: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: function_name.into(),
        }
    }
}

/// The part of an inbound event the ingestion use-case needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestRequest {
    /// Body as carried by the event, possibly base64-encoded.
    pub body: Option<String>,
    /// Set when `body` is base64 text.
    pub is_base64_encoded: bool,
    pub caller: CallerIdentity,
}

impl IngestRequest {
    /// The body, unless it is absent or empty.
    #[must_use]
    pub fn non_empty_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }

    /// The body as text, base64-decoded when flagged. An empty result counts
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEncoding`] when a base64 body does
    /// not decode to UTF-8.
    pub fn decoded_body(&self) -> Result<Option<String>, ValidationError> {
        let Some(body) = self.non_empty_body() else {
            return Ok(None);
        };
        if !self.is_base64_encoded {
            return Ok(Some(body.to_string()));
        }

        let bytes = STANDARD
            .decode(body)
            .map_err(|_| ValidationError::InvalidEncoding)?;
        let text = String::from_utf8(bytes).map_err(|_| ValidationError::InvalidEncoding)?;
        Ok(Some(text).filter(|text| !text.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_empty_body_as_absent() {
        let request = IngestRequest {
            body: Some(String::new()),
            ..Default::default()
        };
        assert!(request.non_empty_body().is_none());
    }

    #[test]
    fn should_keep_whitespace_body() {
        let request = IngestRequest {
            body: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(request.non_empty_body(), Some(" "));
    }

    fn encoded(body: &str) -> IngestRequest {
        IngestRequest {
            body: Some(body.to_string()),
            is_base64_encoded: true,
            ..Default::default()
        }
    }

    #[test]
    fn should_pass_plain_body_through() {
        let request = IngestRequest {
            body: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(request.decoded_body().unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn should_decode_base64_body() {
        let request = encoded(&STANDARD.encode(r#"{"id":"abc"}"#));
        assert_eq!(
            request.decoded_body().unwrap().as_deref(),
            Some(r#"{"id":"abc"}"#)
        );
    }

    #[test]
    fn should_reject_invalid_base64_body() {
        assert!(matches!(
            encoded("%%%").decoded_body(),
            Err(ValidationError::InvalidEncoding)
        ));
    }

    #[test]
    fn should_reject_base64_body_that_is_not_utf8() {
        assert!(matches!(
            encoded(&STANDARD.encode([0xff, 0xfe])).decoded_body(),
            Err(ValidationError::InvalidEncoding)
        ));
    }

    #[test]
    fn should_treat_absent_base64_body_as_absent() {
        let request = IngestRequest {
            is_base64_encoded: true,
            ..Default::default()
        };
        assert!(request.decoded_body().unwrap().is_none());
    }
}
