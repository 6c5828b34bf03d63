//! Volatility indicators for barfold.
//!
//! - [`atr`] - Average True Range over parallel high/low/close columns
//! - [`true_range`] - True Range series
//! - [`AverageTrueRange`] - Incremental ATR

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/barfold/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod atr;
mod error;

pub use atr::{AverageTrueRange, atr, bar_true_range, true_range};
pub use error::IndicatorError;
