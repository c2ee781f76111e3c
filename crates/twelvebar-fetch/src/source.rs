//! Bar source abstraction.

use async_trait::async_trait;
use twelvebar_types::{RawBar, Result};

use crate::TimeSeriesClient;

/// Focused role trait for anything that can fetch raw bars.
///
/// Implementations return bars in provider order and perform at most one
/// upstream call per invocation.
#[async_trait]
pub trait BarSource: Send + Sync + std::fmt::Debug {
    /// Fetch up to `output_size` raw bars of `provider_interval` for `symbol`.
    async fn fetch(
        &self,
        symbol: &str,
        provider_interval: &str,
        output_size: u32,
    ) -> Result<Vec<RawBar>>;
}

#[async_trait]
impl BarSource for TimeSeriesClient {
    async fn fetch(
        &self,
        symbol: &str,
        provider_interval: &str,
        output_size: u32,
    ) -> Result<Vec<RawBar>> {
        Ok(self
            .time_series(symbol, provider_interval, output_size)
            .await?)
    }
}
