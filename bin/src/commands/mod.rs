//! CLI command implementations.

pub(crate) mod fetch;
pub(crate) mod serve;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::warn;
use twelvebar_lib::prelude::*;

/// Builds the service from the process environment.
///
/// A missing credential is not fatal here; each request reports it instead.
pub(crate) fn service_from_env() -> Result<OhlcService> {
    let api_key = std::env::var(API_KEY_ENV).ok();
    let config = ClientConfig::default().with_api_key(api_key);

    if !config.has_api_key() {
        warn!("{API_KEY_ENV} is not set; every get_ohlc call will fail until it is");
    }

    let client = TimeSeriesClient::new(config).context("Failed to build HTTP client")?;
    Ok(OhlcService::new(Arc::new(client)))
}
