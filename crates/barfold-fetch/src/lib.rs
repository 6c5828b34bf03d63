//! Candle retrieval for barfold.
//!
//! This crate provides the data source side of the pipeline:
//!
//! - [`url::klines_url`] - Constructs kline endpoint URLs
//! - [`KlineClient`] - HTTP client with retries
//! - [`parse_klines`] - Kline response parsing
//! - [`CandleSource`] - Async source abstraction with REST, file and in-memory implementations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/barfold/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, KlineClient};
pub use parse::{KLINE_FIELDS, ParseError, parse_klines};
pub use source::{CandleSource, FileSource, StaticSource};
