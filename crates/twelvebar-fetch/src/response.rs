//! Time series response decoding.

use serde::Deserialize;
use twelvebar_types::RawBar;

use crate::FetchError;

/// Status value the provider uses to flag an error body.
const ERROR_STATUS: &str = "error";

/// Message used when an error body carries none.
const DEFAULT_ERROR_MESSAGE: &str = "Twelve Data error";

/// Body of a Twelve Data `time_series` response.
///
/// Successful bodies carry `values`; error bodies carry `status: "error"`
/// with a `code` and `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSeriesResponse {
    /// `"ok"` or `"error"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Provider error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Provider error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Bars, newest first. Kept undecoded so one bad record can be reported
    /// by position.
    #[serde(default)]
    pub values: Option<Vec<serde_json::Value>>,
}

impl TimeSeriesResponse {
    /// Returns true if the body reports a provider error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(ERROR_STATUS)
    }
}

/// Decodes a provider body into raw bars, in provider order.
///
/// A body flagged as an error is reported as [`FetchError::Upstream`]
/// whatever the HTTP status. A missing `values` array yields no bars.
///
/// # Errors
///
/// - [`FetchError::Upstream`] if the body has `status: "error"`
/// - [`FetchError::ServerError`] if the HTTP status is not a success and the
///   body is not a provider error
/// - [`FetchError::InvalidBody`] if a success body is not JSON
/// - [`FetchError::Malformed`] if a `values` entry is not a bar object
pub fn parse_time_series(http_status: u16, body: &[u8]) -> Result<Vec<RawBar>, FetchError> {
    let success = (200..300).contains(&http_status);

    let response: TimeSeriesResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) if !success => return Err(FetchError::ServerError { status: http_status }),
        Err(e) => return Err(FetchError::InvalidBody(e)),
    };

    if response.is_error() {
        return Err(FetchError::Upstream {
            code: response.code.and_then(|c| u16::try_from(c).ok()),
            message: response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        });
    }

    if !success {
        return Err(FetchError::ServerError { status: http_status });
    }

    response
        .values
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawBar>(value).map_err(|e| FetchError::Malformed {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_provider_order() {
        let body = br#"{
            "meta": {"symbol": "EUR/USD", "interval": "1min"},
            "values": [
                {"datetime": "2024-01-15 10:01:00", "open": "1.1", "high": "1.2", "low": "1.0", "close": "1.15"},
                {"datetime": "2024-01-15 10:00:00", "open": "1.0", "high": "1.1", "low": "0.9", "close": "1.1"}
            ],
            "status": "ok"
        }"#;

        let bars = parse_time_series(200, body).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].datetime.as_deref(), Some("2024-01-15 10:01:00"));
        assert_eq!(bars[1].datetime.as_deref(), Some("2024-01-15 10:00:00"));
    }

    #[test]
    fn test_error_body_on_success_status() {
        let body = br#"{"code": 400, "message": "**symbol** not found", "status": "error"}"#;
        let err = parse_time_series(200, body).unwrap_err();
        match err {
            FetchError::Upstream { code, message } => {
                assert_eq!(code, Some(400));
                assert_eq!(message, "**symbol** not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_body_on_failure_status() {
        let body = br#"{"code": 401, "message": "invalid api key", "status": "error"}"#;
        let err = parse_time_series(401, body).unwrap_err();
        assert!(matches!(err, FetchError::Upstream { code: Some(401), .. }));
    }

    #[test]
    fn test_error_body_without_message() {
        let err = parse_time_series(200, br#"{"status": "error"}"#).unwrap_err();
        match err {
            FetchError::Upstream { message, .. } => assert_eq!(message, "Twelve Data error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_values_is_empty() {
        let bars = parse_time_series(200, br#"{"status": "ok"}"#).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn test_non_json_body() {
        let err = parse_time_series(200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBody(_)));
    }

    #[test]
    fn test_non_json_failure_status() {
        let err = parse_time_series(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, FetchError::ServerError { status: 502 }));
    }

    #[test]
    fn test_non_object_value_is_malformed() {
        let body = br#"{"values": [{"datetime": "a", "open": "1", "high": "1", "low": "1", "close": "1"}, 42]}"#;
        let err = parse_time_series(200, body).unwrap_err();
        assert!(matches!(err, FetchError::Malformed { index: 1, .. }));
    }
}
