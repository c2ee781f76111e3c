//! Caller interval definitions.

use serde::{Deserialize, Serialize};

/// Interval token that requests synthetic 2-minute bars.
pub const SYNTHETIC_2M: &str = "2m";

/// Provider interval the synthetic 2-minute bars are built from.
pub const SYNTHETIC_2M_SOURCE: &str = "1min";

/// Interval requested by a caller.
///
/// Native tokens (`1min`, `15min`, `1h`, `1day`, ...) are forwarded to the
/// provider verbatim; the provider is the authority on which ones exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestedInterval {
    /// A provider-native interval token.
    Native(String),
    /// 2-minute bars built from pairs of 1-minute bars.
    Synthetic2m,
}

impl RequestedInterval {
    /// Classifies an interval string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == SYNTHETIC_2M {
            Self::Synthetic2m
        } else {
            Self::Native(s.to_string())
        }
    }

    /// Returns true if bars must be aggregated locally.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic2m)
    }

    /// Returns the interval token sent to the provider.
    #[must_use]
    pub fn provider_interval(&self) -> &str {
        match self {
            Self::Native(s) => s,
            Self::Synthetic2m => SYNTHETIC_2M_SOURCE,
        }
    }

    /// Returns the interval echoed back to the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native(s) => s,
            Self::Synthetic2m => SYNTHETIC_2M,
        }
    }
}

impl std::fmt::Display for RequestedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RequestedInterval {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RequestedInterval {
    fn from(s: String) -> Self {
        if s == SYNTHETIC_2M {
            Self::Synthetic2m
        } else {
            Self::Native(s)
        }
    }
}

impl From<RequestedInterval> for String {
    fn from(interval: RequestedInterval) -> Self {
        match interval {
            RequestedInterval::Native(s) => s,
            RequestedInterval::Synthetic2m => SYNTHETIC_2M.to_string(),
        }
    }
}
