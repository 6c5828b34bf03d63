//! Indicator errors.

use barfold_types::BarfoldError;
use thiserror::Error;

/// Errors that prevent an indicator from being computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// Smoothing period must be positive.
    #[error("Invalid period: {0}")]
    InvalidPeriod(usize),

    /// Not enough bars for the requested period.
    #[error("Insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData {
        /// Minimum number of bars.
        required: usize,
        /// Number of bars supplied.
        actual: usize,
    },

    /// High, low and close columns differ in length.
    #[error("Column length mismatch: highs={highs}, lows={lows}, closes={closes}")]
    LengthMismatch {
        /// Number of highs.
        highs: usize,
        /// Number of lows.
        lows: usize,
        /// Number of closes.
        closes: usize,
    },
}

impl From<IndicatorError> for BarfoldError {
    fn from(err: IndicatorError) -> Self {
        Self::IndicatorUnavailable(err.to_string())
    }
}
