//! Outbound API Gateway proxy response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body message of every successful write.
pub const SUCCESS_MESSAGE: &str = "Successfully inserted data!";

/// API Gateway proxy integration response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON document serialized as text.
    pub body: String,
}

impl ApiGatewayProxyResponse {
    /// A response with a JSON body and the matching `Content-Type`.
    #[must_use]
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.to_string(),
        }
    }

    /// `200` with `{"message": "Successfully inserted data!"}`.
    #[must_use]
    pub fn success() -> Self {
        Self::json(200, &json!({ "message": SUCCESS_MESSAGE }))
    }
}
