//! OHLCV normalization and downsampling for twelvebar.
//!
//! This crate holds the pure part of the request pipeline:
//!
//! - [`normalize`] - Provider records to canonical bars, oldest first
//! - [`ProviderOrder`] - The provider's ordering convention
//! - [`aggregate_pairs`] - 2:1 temporal downsampling

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod normalize;
mod pairs;

pub use normalize::{ProviderOrder, normalize, normalize_bar};
pub use pairs::{aggregate_pairs, merge_pair};
