//! Bar data representation.

use serde::{Deserialize, Serialize};

/// Canonical OHLCV bar.
///
/// Field names are kept short because they are the wire format returned to
/// tool callers. The timestamp is the provider's string, passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time, as emitted by the provider (UTC).
    pub t: String,
    /// Opening price.
    pub o: f64,
    /// Highest price.
    pub h: f64,
    /// Lowest price.
    pub l: f64,
    /// Closing price.
    pub c: f64,
    /// Traded volume, `0` when the provider has none.
    pub v: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub fn new(t: impl Into<String>, o: f64, h: f64, l: f64, c: f64, v: f64) -> Self {
        Self {
            t: t.into(),
            o,
            h,
            l,
            c,
            v,
        }
    }
}

/// Ordered bars, oldest first.
pub type BarSeries = Vec<Bar>;

/// A numeric field as the provider sends it.
///
/// Twelve Data encodes prices as strings, but plain JSON numbers are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// A JSON number.
    Number(f64),
    /// A decimal string such as `"1.08245"`.
    Text(String),
}

impl RawNumber {
    /// Returns the value as a finite `f64`, or `None` if it cannot be read.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Provider-native bar record, before normalization.
///
/// Every field is optional at this stage so that a record with a missing
/// field can be reported with its position instead of failing the whole
/// body decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    /// Bar timestamp string.
    #[serde(default)]
    pub datetime: Option<String>,
    /// Opening price.
    #[serde(default)]
    pub open: Option<RawNumber>,
    /// Highest price.
    #[serde(default)]
    pub high: Option<RawNumber>,
    /// Lowest price.
    #[serde(default)]
    pub low: Option<RawNumber>,
    /// Closing price.
    #[serde(default)]
    pub close: Option<RawNumber>,
    /// Volume, absent for most forex pairs.
    #[serde(default)]
    pub volume: Option<RawNumber>,
}

impl RawBar {
    /// Creates a complete raw record from string fields.
    #[must_use]
    pub fn from_strings(
        datetime: &str,
        open: &str,
        high: &str,
        low: &str,
        close: &str,
        volume: Option<&str>,
    ) -> Self {
        Self {
            datetime: Some(datetime.to_string()),
            open: Some(open.into()),
            high: Some(high.into()),
            low: Some(low.into()),
            close: Some(close.into()),
            volume: volume.map(RawNumber::from),
        }
    }
}
