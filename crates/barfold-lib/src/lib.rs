//! Resample OHLC candles into coarser timeframes and compute the Average True Range.
//!
//! This is a facade crate that re-exports functionality from the barfold
//! workspace crates and wires them into a single pipeline.
//!
//! # Quick Start
//!
//! ```ignore
//! use barfold_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KlineClient::with_defaults()?;
//!     let config = PipelineConfig::new("SOLUSDT").with_limit(200).with_factor(5);
//!
//!     let report = run_atr(&client, &config).await?;
//!     for (bar, atr) in report.bars.iter().zip(&report.atr) {
//!         println!("{} {:.4}", bar.open_time, atr);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/barfold/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use barfold_types::*;

// Re-export aggregation
pub use barfold_aggregate::{
    AggregateError, Bar, TimeframeAggregator, convert_columns, convert_timeframe, resample,
    window_bounds,
};

// Re-export indicators
pub use barfold_indicators::{AverageTrueRange, IndicatorError, atr, bar_true_range, true_range};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use barfold_fetch::{
    CandleSource, ClientConfig, FetchError, FileSource, KlineClient, ParseError, StaticSource,
    parse_klines,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use barfold_format::{
    AtrRow, CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat,
};

#[cfg(feature = "pipeline")]
mod pipeline;

#[cfg(feature = "pipeline")]
pub use pipeline::{
    AtrReport, DEFAULT_FACTOR, DEFAULT_LIMIT, DEFAULT_PERIOD, PipelineConfig, atr_report,
    fetch_series, run_atr, run_resample,
};

/// Prelude module for convenient imports.
///
/// ```
/// use barfold_lib::prelude::*;
/// ```
pub mod prelude {
    pub use barfold_types::{
        BarfoldError, Candle, CandleSeries, Interval, OhlcColumns, Result,
    };

    pub use barfold_aggregate::{Bar, TimeframeAggregator, convert_timeframe};

    pub use barfold_indicators::{AverageTrueRange, atr};

    #[cfg(feature = "fetch")]
    pub use barfold_fetch::{CandleSource, ClientConfig, FileSource, KlineClient, StaticSource};

    #[cfg(feature = "format")]
    pub use barfold_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::{AtrReport, PipelineConfig, run_atr, run_resample};
}
