//! `get_ohlc` request pipeline for twelvebar.
//!
//! Ties the fetch, normalize, aggregate and truncate steps together:
//!
//! - [`RequestPlan`] - Provider interval and page size for a request
//! - [`take_last`] - Keeps the most recent bars
//! - [`OhlcService`] - Runs one request end to end

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod plan;
mod service;

pub use plan::{
    DEFAULT_LIMIT, MAX_NATIVE_OUTPUT_SIZE, MAX_SYNTHETIC_OUTPUT_SIZE, RequestPlan, take_last,
};
pub use service::OhlcService;
