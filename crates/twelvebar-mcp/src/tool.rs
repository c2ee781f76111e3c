//! The `get_ohlc` tool.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;
use twelvebar_service::DEFAULT_LIMIT;
use twelvebar_types::{AggregationResult, TwelvebarError};

/// Tool name.
pub const GET_OHLC: &str = "get_ohlc";

const DESCRIPTION: &str = "Fetch OHLC from Twelve Data. Returns [{t,o,h,l,c,v}] (UTC, oldest→newest). \
     Intervals: 1min,5min,15min,1h,1day, and '2m' (built from 1-min).";

/// Tool metadata as listed by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name.
    pub name: &'static str,
    /// Description shown to the model.
    pub description: &'static str,
    /// JSON schema of the arguments.
    pub input_schema: Value,
}

/// Returns the `get_ohlc` tool definition.
#[must_use]
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: GET_OHLC,
        description: DESCRIPTION,
        input_schema: json!({
            "type": "object",
            "properties": {
                "symbol": { "type": "string", "description": "EUR/USD, BTC/USD, AAPL" },
                "interval": { "type": "string", "description": "e.g., 15min or 2m" },
                "limit": { "type": "integer", "default": DEFAULT_LIMIT }
            },
            "required": ["symbol", "interval"]
        }),
    }
}

/// `tools/call` parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    /// Tool to invoke.
    pub name: String,
    /// Tool arguments.
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Decoded `get_ohlc` arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct GetOhlcArgs {
    /// Instrument symbol.
    pub symbol: String,
    /// Interval token, native or `"2m"`.
    pub interval: String,
    /// Number of most recent bars to return.
    pub limit: i64,
}

#[derive(Deserialize)]
struct RawArgs {
    symbol: String,
    interval: String,
    #[serde(default)]
    limit: Option<f64>,
}

impl GetOhlcArgs {
    /// Decodes and validates tool arguments.
    ///
    /// `limit` may be any JSON number; fractions are truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns a message if a required argument is missing, mistyped or
    /// blank.
    pub fn from_value(arguments: Option<Value>) -> Result<Self, String> {
        let raw: RawArgs = serde_json::from_value(arguments.unwrap_or_else(|| json!({})))
            .map_err(|e| e.to_string())?;

        if raw.symbol.trim().is_empty() {
            return Err("`symbol` must not be empty".to_string());
        }
        if raw.interval.trim().is_empty() {
            return Err("`interval` must not be empty".to_string());
        }

        Ok(Self {
            symbol: raw.symbol,
            interval: raw.interval,
            // `as` saturates out-of-range values.
            limit: raw.limit.map_or(DEFAULT_LIMIT, |l| l.trunc() as i64),
        })
    }
}

/// Builds a successful `tools/call` result.
///
/// The result is carried both as JSON text content and as structured
/// content.
#[must_use]
pub fn success_result(result: &AggregationResult) -> Value {
    structured_result(serde_json::to_value(result))
}

fn structured_result(structured: serde_json::Result<Value>) -> Value {
    match structured {
        Ok(structured) => json!({
            "content": [{ "type": "text", "text": structured.to_string() }],
            "structuredContent": structured,
            "isError": false
        }),
        Err(e) => {
            warn!(error = %e, "failed to serialize get_ohlc result");
            text_error(format!("Failed to serialize result: {e}"))
        }
    }
}

/// Builds a failed `tools/call` result carrying the error message.
#[must_use]
pub fn error_result(error: &TwelvebarError) -> Value {
    text_error(error.to_string())
}

fn text_error(message: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": message }],
        "isError": true
    })
}
