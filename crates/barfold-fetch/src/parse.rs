//! Kline response parsing.

use barfold_types::Candle;
use serde_json::Value;
use thiserror::Error;

/// Number of leading fields each kline row must carry.
pub const KLINE_FIELDS: usize = 6;

/// Errors that can occur while parsing a kline response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not a JSON array of arrays.
    #[error("Invalid kline JSON: {0}")]
    Json(String),

    /// A row has fewer than six fields.
    #[error("Kline row {index} has {len} fields (expected at least 6)")]
    ShortRow {
        /// Row index in the response.
        index: usize,
        /// Number of fields present.
        len: usize,
    },

    /// A field could not be read as a number.
    #[error("Kline row {index} has an invalid {field}")]
    InvalidField {
        /// Row index in the response.
        index: usize,
        /// Name of the field.
        field: &'static str,
    },
}

/// Parses a kline response body into candles, preserving response order.
///
/// Each row is `[open_time, open, high, low, close, volume, ...]`. Prices and
/// volume may be encoded as JSON strings or numbers; extra trailing fields are
/// ignored.
///
/// # Errors
///
/// Returns an error on malformed JSON, short rows or unparsable fields.
pub fn parse_klines(body: &[u8]) -> Result<Vec<Candle>, ParseError> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_slice(body).map_err(|e| ParseError::Json(e.to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &[Value]) -> Result<Candle, ParseError> {
    if row.len() < KLINE_FIELDS {
        return Err(ParseError::ShortRow {
            index,
            len: row.len(),
        });
    }

    let timestamp = row[0]
        .as_i64()
        .ok_or(ParseError::InvalidField {
            index,
            field: "open_time",
        })?;
    let number = |pos: usize, field: &'static str| {
        parse_number(&row[pos]).ok_or(ParseError::InvalidField { index, field })
    };

    Ok(Candle::new(
        timestamp,
        number(1, "open")?,
        number(2, "high")?,
        number(3, "low")?,
        number(4, "close")?,
        number(5, "volume")?,
    ))
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse::<f64>().ok().filter(|v| v.is_finite()),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        [1704067200000, "101.50", "102.00", "101.00", "101.75", "1200.5", 1704067259999, "0", 10, "0", "0", "0"],
        [1704067260000, "101.75", "103.25", "101.70", "103.00", "980.0", 1704067319999, "0", 8, "0", "0", "0"]
    ]"#;

    #[test]
    fn test_parse_klines() {
        let candles = parse_klines(SAMPLE.as_bytes()).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp, 1_704_067_200_000);
        assert!((candles[0].open - 101.5).abs() < 1e-10);
        assert!((candles[1].high - 103.25).abs() < 1e-10);
        assert!((candles[1].volume - 980.0).abs() < 1e-10);
    }

    #[test]
    fn test_numeric_fields() {
        let body = br#"[[0, 1.5, 2, 1, 1.75, 10]]"#;
        let candles = parse_klines(body).unwrap();
        assert!((candles[0].high - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_klines(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_short_row() {
        let body = br#"[[0, "1", "2", "1", "1"], [10]]"#;
        assert_eq!(
            parse_klines(body),
            Err(ParseError::ShortRow { index: 0, len: 5 })
        );
    }

    #[test]
    fn test_invalid_price() {
        let body = br#"[[0, "1", "abc", "1", "1", "1"]]"#;
        assert_eq!(
            parse_klines(body),
            Err(ParseError::InvalidField {
                index: 0,
                field: "high"
            })
        );
    }

    #[test]
    fn test_invalid_timestamp() {
        let body = br#"[["soon", "1", "2", "1", "1", "1"]]"#;
        assert!(matches!(
            parse_klines(body),
            Err(ParseError::InvalidField {
                field: "open_time",
                ..
            })
        ));
    }

    #[test]
    fn test_error_object_is_rejected() {
        let body = br#"{"code": -1121, "msg": "Invalid symbol."}"#;
        assert!(matches!(parse_klines(body), Err(ParseError::Json(_))));
    }
}
