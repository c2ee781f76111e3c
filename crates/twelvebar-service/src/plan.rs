//! Request planning and truncation.

use twelvebar_types::{Bar, RequestedInterval};

/// Number of bars returned when the caller gives no limit.
pub const DEFAULT_LIMIT: i64 = 100;

/// Provider page size cap for native intervals.
pub const MAX_NATIVE_OUTPUT_SIZE: i64 = 100;

/// Provider page size cap for synthetic 2-minute requests.
pub const MAX_SYNTHETIC_OUTPUT_SIZE: i64 = 200;

/// What to ask the provider for, derived from a caller request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    /// Interval as requested.
    pub interval: RequestedInterval,
    /// `outputsize` sent to the provider.
    pub output_size: u32,
    /// Number of bars to keep at the end.
    pub limit: i64,
}

impl RequestPlan {
    /// Plans a request.
    ///
    /// Synthetic 2-minute requests fetch two 1-minute bars per output bar,
    /// capped at [`MAX_SYNTHETIC_OUTPUT_SIZE`]. Native requests fetch `limit`
    /// bars capped at [`MAX_NATIVE_OUTPUT_SIZE`]. The page size never drops
    /// below 1, so a non-positive limit still makes a valid request.
    #[must_use]
    pub fn new(interval: &str, limit: i64) -> Self {
        let interval = RequestedInterval::parse(interval);
        let wanted = if interval.is_synthetic() {
            limit.saturating_mul(2).min(MAX_SYNTHETIC_OUTPUT_SIZE)
        } else {
            limit.min(MAX_NATIVE_OUTPUT_SIZE)
        };
        let output_size = u32::try_from(wanted.max(1)).unwrap_or(1);

        Self {
            interval,
            output_size,
            limit,
        }
    }

    /// Returns the interval token sent to the provider.
    #[must_use]
    pub fn provider_interval(&self) -> &str {
        self.interval.provider_interval()
    }

    /// Returns true if fetched bars must be paired up.
    #[must_use]
    pub const fn needs_aggregation(&self) -> bool {
        self.interval.is_synthetic()
    }
}

/// Keeps the last `limit` bars of an oldest-first series.
///
/// A non-positive limit yields an empty series; a limit past the end keeps
/// everything.
#[must_use]
pub fn take_last(mut bars: Vec<Bar>, limit: i64) -> Vec<Bar> {
    let Ok(limit) = usize::try_from(limit) else {
        return Vec::new();
    };
    if limit >= bars.len() {
        return bars;
    }
    bars.split_off(bars.len() - limit)
}
