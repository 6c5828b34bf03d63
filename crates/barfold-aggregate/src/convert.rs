//! Column-level timeframe conversion.

use std::ops::Range;

use barfold_types::{OhlcColumns, check_lengths};

use crate::AggregateError;

/// Computes the base-candle windows consumed by an aggregation, oldest first.
///
/// Windows are anchored at the most recent candle: the last window is
/// `n - timeframe..n`, the one before it `n - 2 * timeframe..n - timeframe`,
/// and so on. With `ln == 0` the output length is `n / timeframe`; otherwise it
/// is `ln`, which must fit inside the series. A series shorter than one window
/// yields no windows when the length is derived.
///
/// # Errors
///
/// Returns an error if `timeframe` is zero, `n` is zero, or `ln * timeframe`
/// exceeds `n`.
pub fn window_bounds(
    n: usize,
    timeframe: usize,
    ln: usize,
) -> Result<Vec<Range<usize>>, AggregateError> {
    if timeframe == 0 {
        return Err(AggregateError::ZeroTimeframe);
    }
    if n == 0 {
        return Err(AggregateError::EmptySeries);
    }

    let length = if ln == 0 { n / timeframe } else { ln };
    match length.checked_mul(timeframe) {
        Some(consumed) if consumed <= n => {}
        _ => {
            return Err(AggregateError::WindowOutOfBounds {
                length,
                timeframe,
                available: n,
            });
        }
    }

    let mut windows = vec![0..0; length];
    for i in 0..length {
        let start = n - (i + 1) * timeframe;
        let end = n - i * timeframe;
        windows[length - 1 - i] = start..end;
    }
    Ok(windows)
}

/// Aggregates parallel OHLC columns into a coarser timeframe.
///
/// Each output bar folds `timeframe` consecutive base candles: the open of the
/// earliest candle, the highest high, the lowest low and the close of the latest
/// candle. Output index 0 is the oldest bar.
///
/// # Errors
///
/// Returns an error if the columns differ in length or the window geometry is
/// invalid (see [`window_bounds`]).
pub fn convert_timeframe(
    opens: &[f64],
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    timeframe: usize,
    ln: usize,
) -> Result<OhlcColumns, AggregateError> {
    check_lengths(opens, highs, lows, closes)?;
    let windows = window_bounds(opens.len(), timeframe, ln)?;

    let mut out = OhlcColumns {
        opens: Vec::with_capacity(windows.len()),
        highs: Vec::with_capacity(windows.len()),
        lows: Vec::with_capacity(windows.len()),
        closes: Vec::with_capacity(windows.len()),
    };
    for Range { start, end } in windows {
        out.opens.push(opens[start]);
        out.highs.push(max_of(&highs[start..end]));
        out.lows.push(min_of(&lows[start..end]));
        out.closes.push(closes[end - 1]);
    }
    Ok(out)
}

/// Aggregates an [`OhlcColumns`] value; see [`convert_timeframe`].
///
/// # Errors
///
/// Same conditions as [`convert_timeframe`].
pub fn convert_columns(
    columns: &OhlcColumns,
    timeframe: usize,
    ln: usize,
) -> Result<OhlcColumns, AggregateError> {
    convert_timeframe(
        &columns.opens,
        &columns.highs,
        &columns.lows,
        &columns.closes,
        timeframe,
        ln,
    )
}

#[inline]
pub(crate) fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[inline]
pub(crate) fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
