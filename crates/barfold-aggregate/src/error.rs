//! Aggregation errors.

use barfold_types::{BarfoldError, SeriesError};
use thiserror::Error;

/// Errors that reject an aggregation request before any window is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// Aggregation factor of zero.
    #[error("Aggregation factor must be positive")]
    ZeroTimeframe,

    /// No base candles to aggregate.
    #[error("Cannot aggregate an empty series")]
    EmptySeries,

    /// The requested output length would read before the first candle.
    #[error(
        "Requested {length} bars of {timeframe} candles but only {available} candles are available"
    )]
    WindowOutOfBounds {
        /// Requested output length.
        length: usize,
        /// Aggregation factor.
        timeframe: usize,
        /// Number of base candles available.
        available: usize,
    },

    /// Input columns are misaligned.
    #[error(transparent)]
    Columns(#[from] SeriesError),
}

impl From<AggregateError> for BarfoldError {
    fn from(err: AggregateError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
