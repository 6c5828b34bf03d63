//! Kline endpoint URL construction.

use barfold_types::Interval;

/// Default base URL for the futures REST API.
pub const BASE_URL: &str = "https://fapi.binance.com";

/// Path of the kline endpoint.
pub const KLINES_PATH: &str = "/fapi/v1/klines";

/// Maximum candles the endpoint returns per request.
pub const MAX_LIMIT: usize = 1500;

/// Builds the URL for the most recent `limit` candles of `symbol`.
///
/// URL format: `{base_url}/fapi/v1/klines?symbol={SYMBOL}&interval={interval}&limit={limit}`
///
/// # Example
///
/// ```
/// use barfold_fetch::url::{BASE_URL, klines_url};
/// use barfold_types::Interval;
///
/// let url = klines_url(BASE_URL, "solusdt", 200, Interval::Minute1);
/// assert_eq!(url, "https://fapi.binance.com/fapi/v1/klines?symbol=SOLUSDT&interval=1m&limit=200");
/// ```
#[must_use]
pub fn klines_url(base_url: &str, symbol: &str, limit: usize, interval: Interval) -> String {
    format!(
        "{}{}?symbol={}&interval={}&limit={}",
        base_url.trim_end_matches('/'),
        KLINES_PATH,
        symbol.to_uppercase(),
        interval.as_str(),
        limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_klines_url_minutes() {
        let url = klines_url(BASE_URL, "BTCUSDT", 400, Interval::Minute5);
        assert_eq!(
            url,
            "https://fapi.binance.com/fapi/v1/klines?symbol=BTCUSDT&interval=5m&limit=400"
        );
    }

    #[test]
    fn test_klines_url_hours() {
        let url = klines_url(BASE_URL, "ethusdt", 10, Interval::Hour1);
        assert!(url.ends_with("symbol=ETHUSDT&interval=1h&limit=10"));
    }

    #[test]
    fn test_klines_url_trailing_slash() {
        let url = klines_url("http://127.0.0.1:8080/", "solusdt", 5, Interval::Minute1);
        assert_eq!(
            url,
            "http://127.0.0.1:8080/fapi/v1/klines?symbol=SOLUSDT&interval=1m&limit=5"
        );
    }
}
