//! HTTP client for the Twelve Data time series endpoint.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use twelvebar_types::{RawBar, TwelvebarError};

use crate::response::parse_time_series;
use crate::url::{BASE_URL, time_series_url};

/// Environment variable the provider credential is conventionally read from.
pub const API_KEY_ENV: &str = "TWELVE_API_KEY";

/// Configuration for the time series client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the provider API.
    pub base_url: String,
    /// Provider credential. Requests fail before any I/O when unset.
    pub api_key: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("twelvebar/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the provider credential. Empty keys count as unset.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns true if a credential is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Errors that can occur while fetching a time series.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No provider credential is configured.
    #[error("TWELVE_API_KEY not set on server")]
    MissingApiKey,

    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status without a provider error body.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Response body is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The provider reported an error in the body.
    #[error("{message}")]
    Upstream {
        /// Provider error code.
        code: Option<u16>,
        /// Provider error message.
        message: String,
    },

    /// An entry of `values` is not a bar record.
    #[error("Malformed bar at index {index}: {reason}")]
    Malformed {
        /// Position in the response.
        index: usize,
        /// Decoder message.
        reason: String,
    },
}

impl From<FetchError> for TwelvebarError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::MissingApiKey => Self::Configuration(err.to_string()),
            FetchError::Http(_) | FetchError::ServerError { .. } | FetchError::InvalidBody(_) => {
                Self::Transport(err.to_string())
            }
            FetchError::Upstream { code, message } => Self::Upstream { code, message },
            FetchError::Malformed { index, reason } => Self::MalformedData { index, reason },
        }
    }
}

/// Twelve Data time series client.
///
/// Each call performs exactly one request. There is no retry: a failed
/// attempt is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct TimeSeriesClient {
    client: Client,
    config: ClientConfig,
}

impl TimeSeriesClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration (and no credential).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches raw bars in provider order (newest first).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingApiKey`] without touching the network if
    /// no credential is configured, otherwise any error of
    /// [`parse_time_series`] or the HTTP layer.
    pub async fn time_series(
        &self,
        symbol: &str,
        interval: &str,
        output_size: u32,
    ) -> Result<Vec<RawBar>, FetchError> {
        let api_key = self.config.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let url = time_series_url(&self.config.base_url);
        let output_size = output_size.to_string();

        debug!(%url, symbol, interval, outputsize = %output_size, "requesting time series");

        // Errors carry the request URL, which includes the credential.
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("outputsize", output_size.as_str()),
                ("apikey", api_key),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;

        let result = parse_time_series(status, &body);
        match &result {
            Ok(bars) => debug!(symbol, interval, status, bars = bars.len(), "time series received"),
            Err(e) => warn!(symbol, interval, status, error = %e, "time series request failed"),
        }
        result
    }
}
