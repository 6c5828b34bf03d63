//! Error types for barfold.

use thiserror::Error;

/// Result type alias for barfold operations.
pub type Result<T> = std::result::Result<T, BarfoldError>;

/// Errors that can occur across the fetch, aggregate and indicator pipeline.
#[derive(Error, Debug)]
pub enum BarfoldError {
    /// The candle source could not retrieve or parse data.
    #[error("Candle source unavailable: {0}")]
    SourceUnavailable(String),

    /// Input geometry or series shape is invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The indicator could not be computed for the given series.
    #[error("Indicator unavailable: {0}")]
    IndicatorUnavailable(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SeriesError> for BarfoldError {
    fn from(err: SeriesError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Error for malformed candle series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Timestamps are not strictly increasing.
    #[error("Candle timestamps not increasing at index {index}: {previous} >= {current}")]
    NotIncreasing {
        /// Index of the offending candle.
        index: usize,
        /// Timestamp of the preceding candle.
        previous: i64,
        /// Timestamp of the offending candle.
        current: i64,
    },

    /// Parallel OHLC columns differ in length.
    #[error("Column length mismatch: opens={opens}, highs={highs}, lows={lows}, closes={closes}")]
    ColumnMismatch {
        /// Number of opens.
        opens: usize,
        /// Number of highs.
        highs: usize,
        /// Number of lows.
        lows: usize,
        /// Number of closes.
        closes: usize,
    },
}
