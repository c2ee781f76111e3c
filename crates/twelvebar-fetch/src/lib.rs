//! Twelve Data time series client for twelvebar.
//!
//! This crate provides the fetch side of the pipeline:
//!
//! - [`url::time_series_url`] - Builds the time series endpoint URL
//! - [`TimeSeriesClient`] - HTTP client issuing one request per fetch
//! - [`parse_time_series`] - Provider body decoding and error detection
//! - [`BarSource`] - The seam the request pipeline fetches through

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod response;
mod source;
pub mod url;

pub use client::{API_KEY_ENV, ClientConfig, FetchError, TimeSeriesClient};
pub use response::{TimeSeriesResponse, parse_time_series};
pub use source::BarSource;
