//! Average True Range.

use crate::IndicatorError;

fn check_lengths(highs: &[f64], lows: &[f64], closes: &[f64]) -> Result<(), IndicatorError> {
    if lows.len() != highs.len() || closes.len() != highs.len() {
        return Err(IndicatorError::LengthMismatch {
            highs: highs.len(),
            lows: lows.len(),
            closes: closes.len(),
        });
    }
    Ok(())
}

/// True Range of one bar given the previous close.
#[inline]
#[must_use]
pub fn bar_true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Computes the True Range series.
///
/// Index 0 is `NaN`: it has no previous close.
///
/// # Errors
///
/// Returns an error if the inputs differ in length.
pub fn true_range(highs: &[f64], lows: &[f64], closes: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    check_lengths(highs, lows, closes)?;

    let mut tr = vec![f64::NAN; highs.len()];
    for i in 1..highs.len() {
        tr[i] = bar_true_range(highs[i], lows[i], closes[i - 1]);
    }
    Ok(tr)
}

/// Computes the Average True Range with Wilder smoothing.
///
/// The output has the same length as the input. The first `period` values are
/// `NaN`; index `period` holds the mean of the first `period` True Range values.
///
/// # Errors
///
/// Returns an error if `period` is zero, the inputs differ in length, or there
/// are not more than `period` bars.
pub fn atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<Vec<f64>, IndicatorError> {
    check_lengths(highs, lows, closes)?;
    let mut state = AverageTrueRange::new(period)?;
    if highs.len() <= period {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            actual: highs.len(),
        });
    }

    Ok(highs
        .iter()
        .zip(lows)
        .zip(closes)
        .map(|((&h, &l), &c)| state.next(h, l, c).unwrap_or(f64::NAN))
        .collect())
}

/// Incremental Average True Range.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageTrueRange {
    period: usize,
    prev_close: Option<f64>,
    seen: usize,
    seed_sum: f64,
    value: Option<f64>,
}

impl AverageTrueRange {
    /// Creates an ATR with the given smoothing period.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero.
    pub const fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod(period));
        }
        Ok(Self {
            period,
            prev_close: None,
            seen: 0,
            seed_sum: 0.0,
            value: None,
        })
    }

    /// Returns the smoothing period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns the current ATR, if warmed up.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Feeds the next bar, returning the ATR once `period` True Range values
    /// have been observed.
    pub fn next(&mut self, high: f64, low: f64, close: f64) -> Option<f64> {
        let prev_close = self.prev_close.replace(close)?;
        let tr = bar_true_range(high, low, prev_close);
        self.seen += 1;

        let period = self.period as f64;
        self.value = match self.value {
            Some(prev) => Some((prev * (period - 1.0) + tr) / period),
            None => {
                self.seed_sum += tr;
                (self.seen == self.period).then(|| self.seed_sum / period)
            }
        };
        self.value
    }
}
