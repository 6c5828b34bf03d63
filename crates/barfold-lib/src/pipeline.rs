//! Fetch, aggregate and ATR pipeline.

use barfold_aggregate::{Bar, TimeframeAggregator};
use barfold_fetch::CandleSource;
use barfold_indicators::atr;
use barfold_types::{CandleSeries, Interval, Result};
use serde::Serialize;

/// Default number of base candles to fetch.
pub const DEFAULT_LIMIT: usize = 200;
/// Default aggregation factor.
pub const DEFAULT_FACTOR: usize = 5;
/// Default ATR period.
pub const DEFAULT_PERIOD: usize = 14;

/// Parameters of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Instrument symbol.
    pub symbol: String,
    /// Number of base candles to fetch.
    pub limit: usize,
    /// Base candle interval.
    pub interval: Interval,
    /// Base candles folded into one bar.
    pub factor: usize,
    /// Explicit number of bars, or zero to derive it.
    pub length: usize,
    /// ATR smoothing period.
    pub period: usize,
}

impl PipelineConfig {
    /// Creates a configuration for `symbol` with default parameters.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: DEFAULT_LIMIT,
            interval: Interval::default(),
            factor: DEFAULT_FACTOR,
            length: 0,
            period: DEFAULT_PERIOD,
        }
    }

    /// Sets the number of base candles to fetch.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the base interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the aggregation factor.
    #[must_use]
    pub const fn with_factor(mut self, factor: usize) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the explicit output length (zero derives it).
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the ATR period.
    #[must_use]
    pub const fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the aggregator described by this configuration.
    #[must_use]
    pub const fn aggregator(&self) -> TimeframeAggregator {
        TimeframeAggregator::new(self.factor).with_length(self.length)
    }
}

/// Result of an ATR pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtrReport {
    /// Instrument symbol.
    pub symbol: String,
    /// Base candle interval.
    pub interval: Interval,
    /// Aggregation factor.
    pub factor: usize,
    /// ATR period.
    pub period: usize,
    /// Aggregated bars, oldest first.
    pub bars: Vec<Bar>,
    /// ATR per bar; `NaN` during warm-up.
    pub atr: Vec<f64>,
}

impl AtrReport {
    /// Returns the duration of one aggregated bar in minutes.
    #[must_use]
    pub const fn bar_minutes(&self) -> usize {
        self.interval.minutes() as usize * self.factor
    }

    /// Returns the most recent defined ATR value.
    #[must_use]
    pub fn latest_atr(&self) -> Option<f64> {
        self.atr.iter().rev().copied().find(|v| !v.is_nan())
    }

    /// Returns the number of defined ATR values.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.atr.iter().filter(|v| !v.is_nan()).count()
    }
}

/// Fetches the base candle series described by `config`.
///
/// # Errors
///
/// Returns [`barfold_types::BarfoldError::SourceUnavailable`] if retrieval fails.
pub async fn fetch_series<S>(source: &S, config: &PipelineConfig) -> Result<CandleSeries>
where
    S: CandleSource + ?Sized,
{
    let series = source
        .fetch(&config.symbol, config.limit, config.interval)
        .await?;
    if !series.is_uniform() {
        tracing::warn!(
            symbol = %config.symbol,
            interval = %config.interval,
            "candle series has gaps; bars span uneven wall-clock time"
        );
    }
    tracing::debug!(symbol = %config.symbol, candles = series.len(), "fetched base series");
    Ok(series)
}

/// Fetches candles and folds them into bars.
///
/// # Errors
///
/// Returns an error if retrieval fails or the window geometry is invalid.
pub async fn run_resample<S>(source: &S, config: &PipelineConfig) -> Result<Vec<Bar>>
where
    S: CandleSource + ?Sized,
{
    let series = fetch_series(source, config).await?;
    let bars = config.aggregator().bars(&series)?;
    tracing::info!(
        symbol = %config.symbol,
        candles = series.len(),
        bars = bars.len(),
        factor = config.factor,
        "resampled series"
    );
    Ok(bars)
}

/// Runs the full pipeline: fetch, aggregate, then ATR over the aggregated bars.
///
/// # Errors
///
/// Returns [`barfold_types::BarfoldError::SourceUnavailable`] on fetch failure,
/// [`barfold_types::BarfoldError::InvalidInput`] on invalid window geometry and
/// [`barfold_types::BarfoldError::IndicatorUnavailable`] if ATR cannot be computed.
pub async fn run_atr<S>(source: &S, config: &PipelineConfig) -> Result<AtrReport>
where
    S: CandleSource + ?Sized,
{
    let series = fetch_series(source, config).await?;
    atr_report(&series, config)
}

/// Aggregates an already fetched series and computes its ATR.
///
/// # Errors
///
/// Returns an error on invalid window geometry or if ATR cannot be computed.
pub fn atr_report(series: &CandleSeries, config: &PipelineConfig) -> Result<AtrReport> {
    let bars = config.aggregator().bars(series)?;
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let values = atr(&highs, &lows, &closes, config.period)?;
    tracing::info!(
        symbol = %config.symbol,
        bars = bars.len(),
        period = config.period,
        "computed ATR"
    );

    Ok(AtrReport {
        symbol: config.symbol.clone(),
        interval: series.interval(),
        factor: config.factor,
        period: config.period,
        bars,
        atr: values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use barfold_fetch::StaticSource;
    use barfold_types::{BarfoldError, Candle};

    fn ramp_candles(n: usize) -> Vec<Candle> {
        (1..=n)
            .map(|i| {
                let p = i as f64;
                Candle::new(i as i64 * 60_000, p, p, p, p, 1.0)
            })
            .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::new("SOLUSDT");
        assert_eq!(config.limit, 200);
        assert_eq!(config.interval, Interval::Minute1);
        assert_eq!(config.factor, 5);
        assert_eq!(config.length, 0);
        assert_eq!(config.period, 14);
    }

    #[tokio::test]
    async fn test_run_atr_on_ramp() {
        let source = StaticSource::new(ramp_candles(50));
        let config = PipelineConfig::new("TEST").with_limit(50).with_period(3);

        let report = run_atr(&source, &config).await.unwrap();
        assert_eq!(report.bars.len(), 10);
        assert_eq!(report.atr.len(), 10);
        assert_eq!(report.bar_minutes(), 5);

        // Each bar spans 5 consecutive integers: range 4, gap to previous close 1.
        // TR = max(4, |high - prev_close| = 5, |low - prev_close| = 1) = 5
        assert!(report.atr[..3].iter().all(|v| v.is_nan()));
        assert_relative_eq!(report.latest_atr().unwrap(), 5.0);
        assert_eq!(report.defined_count(), 7);
    }

    #[tokio::test]
    async fn test_run_atr_explicit_length() {
        let source = StaticSource::new(ramp_candles(200));
        let config = PipelineConfig::new("TEST").with_length(28);

        let report = run_atr(&source, &config).await.unwrap();
        assert_eq!(report.bars.len(), 28);
        assert_relative_eq!(report.bars[0].open, 61.0);
        assert_relative_eq!(report.bars[27].close, 200.0);
    }

    #[tokio::test]
    async fn test_source_failure_is_source_unavailable() {
        let source = StaticSource::default();
        let err = run_atr(&source, &PipelineConfig::new("TEST")).await.unwrap_err();
        assert!(matches!(err, BarfoldError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_oversized_length_is_invalid_input() {
        let source = StaticSource::new(ramp_candles(20));
        let config = PipelineConfig::new("TEST").with_limit(20).with_length(5);
        let err = run_atr(&source, &config).await.unwrap_err();
        assert!(matches!(err, BarfoldError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_short_series_is_indicator_unavailable() {
        let source = StaticSource::new(ramp_candles(20));
        let config = PipelineConfig::new("TEST").with_limit(20);
        let err = run_atr(&source, &config).await.unwrap_err();
        assert!(matches!(err, BarfoldError::IndicatorUnavailable(_)));
    }

    #[tokio::test]
    async fn test_series_shorter_than_one_bar_is_indicator_unavailable() {
        let source = StaticSource::new(ramp_candles(3));
        let config = PipelineConfig::new("TEST").with_limit(3);
        let err = run_atr(&source, &config).await.unwrap_err();
        assert!(matches!(err, BarfoldError::IndicatorUnavailable(_)));
        assert!(run_resample(&source, &config).await.unwrap().is_empty());
    }

    #[test]
    fn test_atr_report_matches_column_aggregation() {
        let series = CandleSeries::new(Interval::Minute1, ramp_candles(60)).unwrap();
        let config = PipelineConfig::new("TEST").with_period(3);
        let report = atr_report(&series, &config).unwrap();

        let columns = config.aggregator().columns(&series.to_columns()).unwrap();
        let expected = atr(&columns.highs, &columns.lows, &columns.closes, 3).unwrap();
        assert_eq!(report.bars.len(), columns.len());
        for (got, want) in report.atr.iter().zip(&expected) {
            assert!((got.is_nan() && want.is_nan()) || (got - want).abs() < 1e-12);
        }
    }

    #[tokio::test]
    async fn test_run_resample() {
        let source = StaticSource::new(ramp_candles(12));
        let config = PipelineConfig::new("TEST").with_factor(4);
        let bars = run_resample(&source, &config).await.unwrap();
        assert_eq!(bars.len(), 3);
        assert_relative_eq!(bars[2].volume, 4.0);
    }
}
