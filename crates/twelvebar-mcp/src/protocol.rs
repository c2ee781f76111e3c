//! JSON-RPC 2.0 message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version string carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Invalid JSON was received.
pub const PARSE_ERROR: i32 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i32 = -32600;
/// The method does not exist.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i32 = -32602;

/// A request or notification sent by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcRequest {
    /// Always `"2.0"`.
    pub jsonrpc: String,
    /// Request id. `None` marks a notification.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name.
    pub method: String,
    /// Method parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Builds a request, mostly useful in tests.
    #[must_use]
    pub fn new(id: impl Into<Value>, method: &str, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id.into()),
            method: method.to_string(),
            params,
        }
    }

    /// Returns true if no response is expected.
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Error object of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

impl JsonRpcError {
    /// Creates an error.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The body could not be parsed as JSON.
    #[must_use]
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::new(PARSE_ERROR, format!("Parse error: {detail}"))
    }

    /// The body is JSON but not a request.
    #[must_use]
    pub fn invalid_request(detail: impl std::fmt::Display) -> Self {
        Self::new(INVALID_REQUEST, format!("Invalid request: {detail}"))
    }

    /// Unknown method.
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }

    /// Bad parameters.
    #[must_use]
    pub fn invalid_params(detail: impl std::fmt::Display) -> Self {
        Self::new(INVALID_PARAMS, format!("Invalid params: {detail}"))
    }
}

/// A response sent back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Id of the request being answered, `null` if it could not be read.
    pub id: Value,
    /// Result on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub const fn failure(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Classifies a POSTed body.
///
/// Returns `Ok(Some(request))` for requests and notifications, `Ok(None)`
/// for responses sent by the client (this server issues no requests, so
/// they are dropped).
///
/// # Errors
///
/// Returns a parse error for invalid JSON and an invalid-request error for
/// anything that is neither a request nor a response object.
pub fn parse_message(body: &[u8]) -> Result<Option<JsonRpcRequest>, JsonRpcError> {
    let value: Value = serde_json::from_slice(body).map_err(JsonRpcError::parse_error)?;

    let Some(object) = value.as_object() else {
        return Err(JsonRpcError::invalid_request("expected a JSON object"));
    };

    if object.contains_key("method") {
        return serde_json::from_value(value)
            .map(Some)
            .map_err(JsonRpcError::invalid_request);
    }
    if object.contains_key("result") || object.contains_key("error") {
        return Ok(None);
    }
    Err(JsonRpcError::invalid_request("missing `method`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let body = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let request = parse_message(body).unwrap().unwrap();
        assert_eq!(request.method, "tools/list");
        assert_eq!(request.id, Some(json!(1)));
        assert!(!request.is_notification());
    }

    #[test]
    fn test_parse_notification() {
        let body = br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let request = parse_message(body).unwrap().unwrap();
        assert!(request.is_notification());
    }

    #[test]
    fn test_client_response_is_dropped() {
        let body = br#"{"jsonrpc":"2.0","id":"srv-1","result":{}}"#;
        assert_eq!(parse_message(body).unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_message(b"{not json").unwrap_err().code, PARSE_ERROR);
        assert_eq!(parse_message(b"[1,2]").unwrap_err().code, INVALID_REQUEST);
        assert_eq!(parse_message(br#"{"id":1}"#).unwrap_err().code, INVALID_REQUEST);
        assert_eq!(
            parse_message(br#"{"id":1,"method":42}"#).unwrap_err().code,
            INVALID_REQUEST
        );
    }

    #[test]
    fn test_response_serialization() {
        let ok = JsonRpcResponse::success(json!(7), json!({}));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"jsonrpc": "2.0", "id": 7, "result": {}})
        );

        let err = JsonRpcResponse::failure(json!(8), JsonRpcError::method_not_found("nope"));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 8,
                "error": {"code": -32601, "message": "Method not found: nope"}
            })
        );
    }
}
