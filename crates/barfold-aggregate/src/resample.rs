//! Record-level resampling of candle series.

use barfold_types::{CandleSeries, Interval, OhlcColumns};

use crate::{AggregateError, Bar, convert, window_bounds};

/// Aggregates a candle series into bars, carrying open time and volume.
///
/// Uses the same window geometry as [`crate::convert_timeframe`].
///
/// # Errors
///
/// Returns an error if the window geometry is invalid.
pub fn resample(series: &CandleSeries, timeframe: usize, ln: usize) -> Result<Vec<Bar>, AggregateError> {
    let candles = series.candles();
    let windows = window_bounds(candles.len(), timeframe, ln)?;

    Ok(windows
        .into_iter()
        .map(|window| {
            let slice = &candles[window];
            let first = slice[0];
            let last = slice[slice.len() - 1];
            let (high, low, volume) = slice.iter().fold(
                (f64::NEG_INFINITY, f64::INFINITY, 0.0),
                |(high, low, volume), c| (high.max(c.high), low.min(c.low), volume + c.volume),
            );
            Bar::new(first.timestamp, first.open, high, low, last.close, volume, timeframe)
        })
        .collect())
}

/// Timeframe aggregator configured with a factor and an optional output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeAggregator {
    factor: usize,
    length: usize,
}

impl TimeframeAggregator {
    /// Creates an aggregator folding `factor` base candles per bar, with the
    /// output length derived from the series.
    #[must_use]
    pub const fn new(factor: usize) -> Self {
        Self { factor, length: 0 }
    }

    /// Fixes the output length. Zero derives it from the series length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Returns the aggregation factor.
    #[must_use]
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the requested output length (zero when derived).
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the bar duration in minutes for a given base interval.
    #[must_use]
    pub const fn target_minutes(&self, base: Interval) -> usize {
        base.minutes() as usize * self.factor
    }

    /// Aggregates parallel columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns or window geometry are invalid.
    pub fn columns(&self, columns: &OhlcColumns) -> Result<OhlcColumns, AggregateError> {
        convert::convert_columns(columns, self.factor, self.length)
    }

    /// Aggregates a candle series into bars.
    ///
    /// # Errors
    ///
    /// Returns an error if the window geometry is invalid.
    pub fn bars(&self, series: &CandleSeries) -> Result<Vec<Bar>, AggregateError> {
        resample(series, self.factor, self.length)
    }
}
