//! Core types for the twelvebar OHLCV proxy.
//!
//! This crate provides the data structures shared across the workspace:
//!
//! - [`RawBar`] - A provider-native bar record before normalization
//! - [`Bar`] - The canonical `{t,o,h,l,c,v}` bar
//! - [`AggregationResult`] - The value returned by a `get_ohlc` request
//! - [`RequestedInterval`] - A caller interval, native or synthetic
//! - [`TwelvebarError`] - The error taxonomy of the pipeline

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod interval;
mod result;

pub use bar::{Bar, BarSeries, RawBar, RawNumber};
pub use error::{Result, TwelvebarError};
pub use interval::{RequestedInterval, SYNTHETIC_2M, SYNTHETIC_2M_SOURCE};
pub use result::AggregationResult;
