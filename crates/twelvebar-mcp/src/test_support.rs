//! Shared test fixtures.

use async_trait::async_trait;
use std::sync::Arc;
use twelvebar_fetch::BarSource;
use twelvebar_service::OhlcService;
use twelvebar_types::{RawBar, Result, TwelvebarError};

use crate::McpHandler;

/// Source returning a fixed response.
#[derive(Debug)]
pub(crate) struct FakeSource {
    response: Result<Vec<RawBar>>,
}

impl FakeSource {
    pub(crate) fn ok(bars: Vec<RawBar>) -> Arc<Self> {
        Arc::new(Self { response: Ok(bars) })
    }

    pub(crate) fn failing(err: TwelvebarError) -> Arc<Self> {
        Arc::new(Self { response: Err(err) })
    }
}

#[async_trait]
impl BarSource for FakeSource {
    async fn fetch(
        &self,
        _symbol: &str,
        _interval: &str,
        _output_size: u32,
    ) -> Result<Vec<RawBar>> {
        self.response.clone()
    }
}

pub(crate) fn handler_with(source: Arc<FakeSource>) -> McpHandler {
    McpHandler::new(OhlcService::new(source))
}

/// Three newest-first 1-minute bars.
pub(crate) fn sample_bars() -> Vec<RawBar> {
    vec![
        RawBar::from_strings("10:02", "1", "3", "0", "2", Some("5")),
        RawBar::from_strings("10:01", "2", "2", "1", "1", Some("3")),
        RawBar::from_strings("10:00", "5", "5", "4", "5", Some("1")),
    ]
}
