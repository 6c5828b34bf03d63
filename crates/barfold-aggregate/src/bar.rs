//! Aggregated bar record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bar folded from a window of base candles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Open time of the first candle in the window, in epoch milliseconds.
    pub open_time: i64,
    /// Opening price (first candle's open).
    pub open: f64,
    /// Highest price across the window.
    pub high: f64,
    /// Lowest price across the window.
    pub low: f64,
    /// Closing price (last candle's close).
    pub close: f64,
    /// Total volume across the window.
    pub volume: f64,
    /// Number of base candles in the bar.
    pub candle_count: usize,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        open_time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        candle_count: usize,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            candle_count,
        }
    }

    /// Returns the open time as a UTC datetime.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.open_time)
    }
}
