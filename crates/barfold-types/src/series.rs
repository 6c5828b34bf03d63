//! Candle series and the parallel column layout.

use crate::{Candle, Interval, SeriesError};

/// An ordered candle series, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    interval: Interval,
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Creates a series, validating that timestamps strictly increase.
    ///
    /// # Errors
    ///
    /// Returns an error if any candle's timestamp is not greater than its predecessor's.
    pub fn new(interval: Interval, candles: Vec<Candle>) -> Result<Self, SeriesError> {
        if let Some((index, pair)) = candles
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(SeriesError::NotIncreasing {
                index: index + 1,
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
        Ok(Self { interval, candles })
    }

    /// Returns the base interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the candles, oldest first.
    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Returns the number of candles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if the series has no candles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the most recent candle.
    #[must_use]
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Returns true if every consecutive pair is exactly one interval apart.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let step = self.interval.milliseconds();
        self.candles
            .windows(2)
            .all(|pair| pair[1].timestamp.checked_sub(pair[0].timestamp) == Some(step))
    }

    /// Splits the series into parallel open/high/low/close columns.
    #[must_use]
    pub fn to_columns(&self) -> OhlcColumns {
        let n = self.candles.len();
        let mut columns = OhlcColumns {
            opens: Vec::with_capacity(n),
            highs: Vec::with_capacity(n),
            lows: Vec::with_capacity(n),
            closes: Vec::with_capacity(n),
        };
        for candle in &self.candles {
            columns.opens.push(candle.open);
            columns.highs.push(candle.high);
            columns.lows.push(candle.low);
            columns.closes.push(candle.close);
        }
        columns
    }
}

/// Four parallel OHLC sequences aligned by index, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OhlcColumns {
    /// Opening prices.
    pub opens: Vec<f64>,
    /// High prices.
    pub highs: Vec<f64>,
    /// Low prices.
    pub lows: Vec<f64>,
    /// Closing prices.
    pub closes: Vec<f64>,
}

impl OhlcColumns {
    /// Creates columns, checking that all four have equal length.
    ///
    /// # Errors
    ///
    /// Returns an error if the column lengths differ.
    pub fn new(
        opens: Vec<f64>,
        highs: Vec<f64>,
        lows: Vec<f64>,
        closes: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        check_lengths(&opens, &highs, &lows, &closes)?;
        Ok(Self {
            opens,
            highs,
            lows,
            closes,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Checks that four parallel columns have equal length.
///
/// # Errors
///
/// Returns [`SeriesError::ColumnMismatch`] if any length differs.
pub fn check_lengths(
    opens: &[f64],
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
) -> Result<(), SeriesError> {
    let n = opens.len();
    if highs.len() != n || lows.len() != n || closes.len() != n {
        return Err(SeriesError::ColumnMismatch {
            opens: n,
            highs: highs.len(),
            lows: lows.len(),
            closes: closes.len(),
        });
    }
    Ok(())
}
