//! Timeframe aggregation for barfold.
//!
//! This crate folds fixed-interval candles into a coarser timeframe:
//!
//! - [`convert_timeframe`] - Column-level aggregation of parallel OHLC slices
//! - [`resample`] - Record-level aggregation producing [`Bar`]s with volume
//! - [`TimeframeAggregator`] - Factor and length bundled for repeated use
//! - [`window_bounds`] - The base-candle ranges an aggregation consumes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/barfold/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod convert;
mod error;
mod resample;

pub use bar::Bar;
pub use convert::{convert_columns, convert_timeframe, window_bounds};
pub use error::AggregateError;
pub use resample::{TimeframeAggregator, resample};
