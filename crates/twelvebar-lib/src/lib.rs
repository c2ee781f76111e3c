//! Rust library for fetching and pairing Twelve Data OHLCV bars.
//!
//! This is a facade crate that re-exports functionality from the twelvebar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use twelvebar_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default()
//!         .with_api_key(std::env::var(API_KEY_ENV).ok());
//!     let client = TimeSeriesClient::new(config)?;
//!     let service = OhlcService::new(Arc::new(client));
//!
//!     let result = service.get_ohlc("EUR/USD", "2m", 50).await?;
//!     println!("{} bars of {} {}", result.len(), result.symbol, result.interval);
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use twelvebar_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use twelvebar_fetch::{
    API_KEY_ENV, BarSource, ClientConfig, FetchError, TimeSeriesClient, TimeSeriesResponse,
    parse_time_series,
};

// Re-export normalization and pairing
#[cfg(feature = "aggregate")]
pub use twelvebar_aggregate::{ProviderOrder, aggregate_pairs, merge_pair, normalize};

// Re-export formatters
#[cfg(feature = "format")]
pub use twelvebar_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

// Re-export request orchestration
#[cfg(feature = "service")]
pub use twelvebar_service::{DEFAULT_LIMIT, OhlcService, RequestPlan, take_last};

/// Prelude module for convenient imports.
///
/// ```
/// use twelvebar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use twelvebar_types::{
        AggregationResult, Bar, RawBar, RequestedInterval, Result, TwelvebarError,
    };

    #[cfg(feature = "fetch")]
    pub use twelvebar_fetch::{API_KEY_ENV, BarSource, ClientConfig, TimeSeriesClient};

    #[cfg(feature = "aggregate")]
    pub use twelvebar_aggregate::{ProviderOrder, aggregate_pairs};

    #[cfg(feature = "format")]
    pub use twelvebar_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "service")]
    pub use twelvebar_service::OhlcService;
}
