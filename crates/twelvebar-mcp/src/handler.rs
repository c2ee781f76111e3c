//! JSON-RPC method dispatch.

use serde_json::{Value, json};
use tracing::{debug, warn};
use twelvebar_service::OhlcService;

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::tool::{self, CallToolParams, GET_OHLC, GetOhlcArgs};

/// Server name reported during `initialize`.
pub const SERVER_NAME: &str = "twelve-data-ohlc";

/// Protocol revisions this server can speak, oldest first.
pub const PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

/// Dispatches MCP requests to the `get_ohlc` pipeline.
#[derive(Debug, Clone)]
pub struct McpHandler {
    service: OhlcService,
}

impl McpHandler {
    /// Creates a handler over the given service.
    #[must_use]
    pub const fn new(service: OhlcService) -> Self {
        Self { service }
    }

    /// Handles one request.
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            debug!(method = %request.method, "notification received");
            return None;
        };
        debug!(method = %request.method, %id, "request received");

        let outcome = match request.method.as_str() {
            "initialize" => Ok(initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": [tool::definition()] })),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(JsonRpcError::invalid_params)?;

        if params.name != GET_OHLC {
            return Err(JsonRpcError::invalid_params(format!(
                "Unknown tool: {}",
                params.name
            )));
        }

        let args = GetOhlcArgs::from_value(params.arguments).map_err(JsonRpcError::invalid_params)?;

        match self
            .service
            .get_ohlc(&args.symbol, &args.interval, args.limit)
            .await
        {
            Ok(result) => Ok(tool::success_result(&result)),
            Err(e) => {
                warn!(
                    symbol = %args.symbol,
                    interval = %args.interval,
                    kind = e.kind(),
                    error = %e,
                    "get_ohlc failed"
                );
                Ok(tool::error_result(&e))
            }
        }
    }
}

/// Builds the `initialize` result, agreeing on the client's protocol
/// revision when it is one we support.
fn initialize(params: Option<&Value>) -> Value {
    let requested = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str);
    let version = requested
        .filter(|v| PROTOCOL_VERSIONS.contains(v))
        .unwrap_or(PROTOCOL_VERSIONS[0]);

    json!({
        "protocolVersion": version,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
    })
}
