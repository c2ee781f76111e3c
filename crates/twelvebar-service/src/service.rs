//! Request orchestration.

use std::sync::Arc;
use tracing::{debug, info};
use twelvebar_aggregate::{ProviderOrder, aggregate_pairs, normalize};
use twelvebar_fetch::BarSource;
use twelvebar_types::{AggregationResult, Result};

use crate::plan::{RequestPlan, take_last};

/// Runs `get_ohlc` requests against a bar source.
///
/// Holds no per-request state; clones share the source and can serve
/// requests concurrently.
#[derive(Debug, Clone)]
pub struct OhlcService {
    source: Arc<dyn BarSource>,
    order: ProviderOrder,
}

impl OhlcService {
    /// Creates a service over the given source, assuming newest-first
    /// provider order.
    #[must_use]
    pub fn new(source: Arc<dyn BarSource>) -> Self {
        Self {
            source,
            order: ProviderOrder::default(),
        }
    }

    /// Overrides the provider ordering assumption.
    #[must_use]
    pub fn with_provider_order(mut self, order: ProviderOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the provider ordering assumption.
    #[must_use]
    pub const fn provider_order(&self) -> ProviderOrder {
        self.order
    }

    /// Fetches, normalizes, optionally aggregates, and truncates bars.
    ///
    /// # Errors
    ///
    /// Returns whatever the source reports (configuration, upstream or
    /// transport errors) and [`twelvebar_types::TwelvebarError::MalformedData`]
    /// if a record cannot be normalized. Nothing is returned partially.
    pub async fn get_ohlc(
        &self,
        symbol: &str,
        interval: &str,
        limit: i64,
    ) -> Result<AggregationResult> {
        let plan = RequestPlan::new(interval, limit);
        debug!(
            symbol,
            interval,
            provider_interval = plan.provider_interval(),
            output_size = plan.output_size,
            "planned request"
        );

        let raw = self
            .source
            .fetch(symbol, plan.provider_interval(), plan.output_size)
            .await?;
        let fetched = raw.len();

        let mut bars = normalize(raw, self.order)?;
        if plan.needs_aggregation() {
            bars = aggregate_pairs(&bars);
        }
        let bars = take_last(bars, plan.limit);

        info!(symbol, interval = %plan.interval, fetched, returned = bars.len(), "get_ohlc served");
        Ok(AggregationResult::new(symbol, &plan.interval, bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use twelvebar_fetch::{ClientConfig, TimeSeriesClient};
    use twelvebar_types::{Bar, RawBar, TwelvebarError};

    /// In-memory source recording each call.
    #[derive(Debug)]
    struct FakeSource {
        response: Result<Vec<RawBar>>,
        calls: Mutex<Vec<(String, String, u32)>>,
    }

    impl FakeSource {
        fn ok(bars: Vec<RawBar>) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(bars),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: TwelvebarError) -> Arc<Self> {
            Arc::new(Self {
                response: Err(err),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, String, u32)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BarSource for FakeSource {
        async fn fetch(
            &self,
            symbol: &str,
            provider_interval: &str,
            output_size: u32,
        ) -> Result<Vec<RawBar>> {
            self.calls.lock().unwrap().push((
                symbol.to_string(),
                provider_interval.to_string(),
                output_size,
            ));
            self.response.clone()
        }
    }

    fn raw(t: &str, o: f64, h: f64, l: f64, c: f64, v: f64) -> RawBar {
        RawBar::from_strings(
            t,
            &o.to_string(),
            &h.to_string(),
            &l.to_string(),
            &c.to_string(),
            Some(&v.to_string()),
        )
    }

    /// Newest-first 1-minute bars `t{n-1}` .. `t0`.
    fn minutes(n: usize) -> Vec<RawBar> {
        (0..n)
            .rev()
            .map(|i| raw(&format!("t{i:02}"), 1.0, 2.0, 0.5, 1.5, 1.0))
            .collect()
    }

    #[tokio::test]
    async fn test_two_minute_example() {
        let source = FakeSource::ok(vec![
            raw("10:02", 1.0, 3.0, 0.0, 2.0, 5.0),
            raw("10:01", 2.0, 2.0, 1.0, 1.0, 3.0),
            raw("10:00", 5.0, 5.0, 4.0, 5.0, 1.0),
        ]);
        let service = OhlcService::new(source.clone());

        let result = service.get_ohlc("EUR/USD", "2m", 10).await.unwrap();

        assert_eq!(result.symbol, "EUR/USD");
        assert_eq!(result.interval, "2m");
        assert_eq!(result.data, vec![Bar::new("10:00", 5.0, 5.0, 1.0, 1.0, 4.0)]);
        assert_eq!(
            source.calls(),
            vec![("EUR/USD".to_string(), "1min".to_string(), 20)]
        );
    }

    #[tokio::test]
    async fn test_native_interval_passes_through() {
        let source = FakeSource::ok(minutes(5));
        let service = OhlcService::new(source.clone());

        let result = service.get_ohlc("AAPL", "15min", 100).await.unwrap();

        assert_eq!(result.interval, "15min");
        assert_eq!(result.len(), 5);
        assert_eq!(result.data.first().unwrap().t, "t00");
        assert_eq!(result.data.last().unwrap().t, "t04");
        assert_eq!(source.calls()[0].1, "15min");
        assert_eq!(source.calls()[0].2, 100);
    }

    #[tokio::test]
    async fn test_truncates_to_most_recent() {
        let source = FakeSource::ok(minutes(10));
        let service = OhlcService::new(source);

        let result = service.get_ohlc("AAPL", "1min", 3).await.unwrap();

        let times: Vec<_> = result.data.iter().map(|b| b.t.as_str()).collect();
        assert_eq!(times, ["t07", "t08", "t09"]);
    }

    #[tokio::test]
    async fn test_synthetic_truncates_after_aggregation() {
        let source = FakeSource::ok(minutes(9));
        let service = OhlcService::new(source);

        let result = service.get_ohlc("BTC/USD", "2m", 2).await.unwrap();

        // 9 minutes -> 4 pairs (t08 dropped) -> last 2 pairs.
        let times: Vec<_> = result.data.iter().map(|b| b.t.as_str()).collect();
        assert_eq!(times, ["t04", "t06"]);
        assert!(result.data.iter().all(|b| (b.v - 2.0).abs() < 1e-12));
    }

    #[tokio::test]
    async fn test_non_positive_limit_is_empty() {
        let source = FakeSource::ok(minutes(4));
        let service = OhlcService::new(source.clone());

        let result = service.get_ohlc("AAPL", "1min", 0).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(source.calls()[0].2, 1);
    }

    #[tokio::test]
    async fn test_oldest_first_provider() {
        let source = FakeSource::ok(vec![
            raw("10:00", 1.0, 1.0, 1.0, 1.0, 0.0),
            raw("10:01", 2.0, 2.0, 2.0, 2.0, 0.0),
        ]);
        let service = OhlcService::new(source).with_provider_order(ProviderOrder::OldestFirst);

        let result = service.get_ohlc("AAPL", "1min", 10).await.unwrap();
        assert_eq!(result.data[0].t, "10:00");
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let source = FakeSource::failing(TwelvebarError::Upstream {
            code: Some(404),
            message: "symbol not found".to_string(),
        });
        let service = OhlcService::new(source);

        let err = service.get_ohlc("NOPE", "1h", 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Upstream error: symbol not found");
    }

    #[tokio::test]
    async fn test_malformed_record_fails_request() {
        let mut broken = raw("10:00", 1.0, 1.0, 1.0, 1.0, 0.0);
        broken.open = None;
        let source = FakeSource::ok(vec![raw("10:01", 1.0, 1.0, 1.0, 1.0, 0.0), broken]);
        let service = OhlcService::new(source);

        let err = service.get_ohlc("AAPL", "1min", 10).await.unwrap_err();
        assert!(matches!(err, TwelvebarError::MalformedData { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        // Unreachable base: any network attempt would be a transport error.
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
        let client = TimeSeriesClient::new(config).unwrap();
        let service = OhlcService::new(Arc::new(client));

        let err = service.get_ohlc("AAPL", "1min", 10).await.unwrap_err();
        assert!(matches!(err, TwelvebarError::Configuration(_)));
    }
}
