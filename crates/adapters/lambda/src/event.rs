//! Inbound API Gateway proxy event.
//!
//! Only the fields the handler reads are modelled; everything else in the
//! event is ignored.

use serde::{Deserialize, Serialize};

use moviehub_app::invocation::{CallerIdentity, IngestRequest};

/// API Gateway proxy integration event (REST or HTTP API).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyEvent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

/// `requestContext` block of the event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// REST API (payload v1) caller identity.
    #[serde(default)]
    pub identity: Option<Identity>,
    /// HTTP API (payload v2) request description.
    #[serde(default)]
    pub http: Option<Identity>,
}

/// Caller metadata; both payload versions use the same key names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ApiGatewayProxyEvent {
    /// Caller metadata, preferring `identity` and falling back to `http`
    /// field by field.
    #[must_use]
    pub fn caller(&self) -> CallerIdentity {
        let context = self.request_context.as_ref();
        let identity = context.and_then(|ctx| ctx.identity.as_ref());
        let http = context.and_then(|ctx| ctx.http.as_ref());

        let pick = |get: fn(&Identity) -> Option<&String>| {
            identity
                .and_then(get)
                .or_else(|| http.and_then(get))
                .cloned()
        };

        CallerIdentity {
            source_ip: pick(|id| id.source_ip.as_ref()),
            user_agent: pick(|id| id.user_agent.as_ref()),
        }
    }

    /// Convert into the use-case input. The body is handed over as-is;
    /// base64 decoding happens in the use-case.
    #[must_use]
    pub fn to_request(&self) -> IngestRequest {
        IngestRequest {
            body: self.body.clone(),
            is_base64_encoded: self.is_base64_encoded.unwrap_or(false),
            caller: self.caller(),
        }
    }
}
