//! Core types for barfold.
//!
//! This crate provides the fundamental data structures used throughout barfold:
//!
//! - [`Candle`] - A single fixed-interval OHLCV candle
//! - [`CandleSeries`] - Validated candle sequence, oldest first
//! - [`OhlcColumns`] - Four parallel open/high/low/close columns
//! - [`Interval`] - Exchange base candle interval
//! - [`BarfoldError`] - Pipeline error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/barfold/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod error;
mod interval;
mod series;

pub use candle::Candle;
pub use error::{BarfoldError, Result, SeriesError};
pub use interval::{Interval, IntervalParseError};
pub use series::{CandleSeries, OhlcColumns, check_lengths};
