//! Benchmark utilities for barfold.

use barfold_types::{Candle, CandleSeries, Interval, SeriesError};

/// Generates `n` deterministic one-minute candles following a bounded random walk.
pub fn synthetic_candles(n: usize) -> Vec<Candle> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let mut close = 100.0;
    (0..n)
        .map(|i| {
            let open = close;
            close = (open + (next() - 0.5) * 0.4).max(1.0);
            let high = open.max(close) + next() * 0.1;
            let low = open.min(close) - next() * 0.1;
            let volume = 50.0 + next() * 500.0;
            Candle::new(i as i64 * 60_000, open, high, low, close, volume)
        })
        .collect()
}

/// Wraps [`synthetic_candles`] in a one-minute series.
///
/// # Errors
///
/// Never fails for generated data; the signature mirrors [`CandleSeries::new`].
pub fn synthetic_series(n: usize) -> Result<CandleSeries, SeriesError> {
    CandleSeries::new(Interval::Minute1, synthetic_candles(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_candles_are_valid() {
        let candles = synthetic_candles(1_000);
        assert_eq!(candles.len(), 1_000);
        for c in &candles {
            assert!(c.low <= c.open.min(c.close));
            assert!(c.high >= c.open.max(c.close));
        }
        assert!(synthetic_series(1_000).unwrap().is_uniform());
    }

    #[test]
    fn test_synthetic_candles_are_deterministic() {
        assert_eq!(synthetic_candles(64), synthetic_candles(64));
    }
}
