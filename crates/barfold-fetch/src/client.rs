//! HTTP client for the kline endpoint.

use barfold_types::{BarfoldError, CandleSeries, Interval, SeriesError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::parse::{ParseError, parse_klines};
use crate::url::{BASE_URL, MAX_LIMIT, klines_url};

/// Configuration for the kline client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            user_agent: format!("barfold/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching candles.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server kept returning an error status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// The API rejected the request.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// Response body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Candles were not in strictly increasing time order.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// The source returned no candles.
    #[error("No candles returned for {symbol}")]
    Empty {
        /// Requested symbol.
        symbol: String,
    },

    /// Requested candle count is outside the endpoint's range.
    #[error("Candle count {0} outside 1..={MAX_LIMIT}", MAX_LIMIT = MAX_LIMIT)]
    InvalidLimit(usize),

    /// Reading a saved response failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FetchError> for BarfoldError {
    fn from(err: FetchError) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}

/// Error body returned by the API on rejected requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// HTTP client with retry logic for the kline endpoint.
#[derive(Debug, Clone)]
pub struct KlineClient {
    client: Client,
    config: ClientConfig,
}

impl KlineClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the most recent `limit` candles of `symbol`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries, the body is
    /// malformed, no candles are returned, or timestamps are out of order.
    pub async fn fetch_klines(
        &self,
        symbol: &str,
        limit: usize,
        interval: Interval,
    ) -> Result<CandleSeries, FetchError> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(FetchError::InvalidLimit(limit));
        }

        let url = klines_url(&self.config.base_url, symbol, limit, interval);
        tracing::debug!(%url, "requesting klines");

        let body = self.download(&url).await?;
        let candles = parse_klines(&body)?;
        if candles.is_empty() {
            return Err(FetchError::Empty {
                symbol: symbol.to_string(),
            });
        }
        tracing::info!(symbol, count = candles.len(), %interval, "fetched klines");

        Ok(CandleSeries::new(interval, candles)?)
    }

    /// Downloads a response body, retrying transient failures.
    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    // Retry on server errors (5xx) and rate limiting (429)
                    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            tracing::warn!(
                                status = status.as_u16(),
                                attempt = attempts,
                                delay_ms = delay.as_millis() as u64,
                                "retrying kline request"
                            );
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                        });
                    }

                    if !status.is_success() {
                        let body = response.text().await?;
                        return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                            Ok(api) => FetchError::Api {
                                status: status.as_u16(),
                                code: api.code,
                                message: api.msg,
                            },
                            Err(_) => FetchError::ServerError {
                                status: status.as_u16(),
                            },
                        });
                    }

                    return Ok(response.bytes().await?.to_vec());
                }
                Err(e) if Self::is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tracing::warn!(
                        error = %e,
                        attempt = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "retrying kline request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter within ±25%, derived from the attempt number
        let jitter_range = capped_delay / 4;
        let offset = if jitter_range > 0 {
            (u64::from(attempt) * 17) % (jitter_range * 2)
        } else {
            0
        };

        let final_delay = (capped_delay + offset).saturating_sub(jitter_range).max(100);
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_delay_ms, 500);
        assert_eq!(config.max_delay_ms, 10_000);
        assert!(config.user_agent.starts_with("barfold/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = KlineClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_backoff_delay_calculation() {
        let client = KlineClient::with_defaults().unwrap();

        // First attempt: base_delay * 2 = 1000ms (plus jitter)
        let delay1 = client.calculate_backoff_delay(1);
        assert!(delay1.as_millis() >= 750 && delay1.as_millis() <= 1250);

        // Second attempt: base_delay * 4 = 2000ms (plus jitter)
        let delay2 = client.calculate_backoff_delay(2);
        assert!(delay2.as_millis() >= 1500 && delay2.as_millis() <= 2500);

        // High attempt should be capped at max_delay
        let delay_high = client.calculate_backoff_delay(20);
        assert!(delay_high.as_millis() <= 12_500);
    }

    #[tokio::test]
    async fn test_invalid_limit_rejected_before_request() {
        let client = KlineClient::with_defaults().unwrap();
        let err = client
            .fetch_klines("SOLUSDT", 0, Interval::Minute1)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidLimit(0)));

        let err = client
            .fetch_klines("SOLUSDT", MAX_LIMIT + 1, Interval::Minute1)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidLimit(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_error() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            max_retries: 0,
            timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let client = KlineClient::new(config).unwrap();
        let err = client
            .fetch_klines("SOLUSDT", 10, Interval::Minute1)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
        assert!(matches!(BarfoldError::from(err), BarfoldError::SourceUnavailable(_)));
    }
}
