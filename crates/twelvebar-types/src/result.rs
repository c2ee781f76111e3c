//! Request result.

use serde::{Deserialize, Serialize};

use crate::{BarSeries, RequestedInterval};

/// Result of one `get_ohlc` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Symbol as requested by the caller.
    pub symbol: String,
    /// `"2m"` for synthetic bars, otherwise the requested interval.
    pub interval: String,
    /// Bars, oldest first.
    pub data: BarSeries,
}

impl AggregationResult {
    /// Creates a result for the given request.
    #[must_use]
    pub fn new(symbol: impl Into<String>, interval: &RequestedInterval, data: BarSeries) -> Self {
        Self {
            symbol: symbol.into(),
            interval: interval.as_str().to_string(),
            data,
        }
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no bars were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
