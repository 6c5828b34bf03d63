//! Candle source abstraction.

use async_trait::async_trait;
use barfold_types::{Candle, CandleSeries, Interval};
use std::path::PathBuf;

use crate::{FetchError, KlineClient, parse::parse_klines};

/// A provider of fixed-interval candle series.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Retrieves the most recent `count` candles of `symbol`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the candles cannot be retrieved or parsed.
    async fn fetch(
        &self,
        symbol: &str,
        count: usize,
        interval: Interval,
    ) -> Result<CandleSeries, FetchError>;
}

#[async_trait]
impl CandleSource for KlineClient {
    async fn fetch(
        &self,
        symbol: &str,
        count: usize,
        interval: Interval,
    ) -> Result<CandleSeries, FetchError> {
        self.fetch_klines(symbol, count, interval).await
    }
}

/// Candle source backed by a saved kline response on disk.
///
/// The symbol is ignored; the file is assumed to hold candles for it at the
/// requested interval.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CandleSource for FileSource {
    async fn fetch(
        &self,
        symbol: &str,
        count: usize,
        interval: Interval,
    ) -> Result<CandleSeries, FetchError> {
        let body = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = body.len(), "read saved klines");
        tail_series(symbol, parse_klines(&body)?, count, interval)
    }
}

/// Candle source serving a fixed in-memory candle list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candles: Vec<Candle>,
}

impl StaticSource {
    /// Creates a source serving `candles` (oldest first).
    #[must_use]
    pub const fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }
}

#[async_trait]
impl CandleSource for StaticSource {
    async fn fetch(
        &self,
        symbol: &str,
        count: usize,
        interval: Interval,
    ) -> Result<CandleSeries, FetchError> {
        tail_series(symbol, self.candles.clone(), count, interval)
    }
}

/// Keeps the most recent `count` candles, mirroring the endpoint's `limit`.
fn tail_series(
    symbol: &str,
    mut candles: Vec<Candle>,
    count: usize,
    interval: Interval,
) -> Result<CandleSeries, FetchError> {
    if count == 0 {
        return Err(FetchError::InvalidLimit(count));
    }
    if candles.is_empty() {
        return Err(FetchError::Empty {
            symbol: symbol.to_string(),
        });
    }
    let skip = candles.len().saturating_sub(count);
    candles.drain(..skip);
    Ok(CandleSeries::new(interval, candles)?)
}
