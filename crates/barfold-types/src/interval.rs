//! Exchange base candle intervals.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base interval of a fetched candle series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute candles.
    #[default]
    #[serde(rename = "1m")]
    Minute1,
    /// 3-minute candles.
    #[serde(rename = "3m")]
    Minute3,
    /// 5-minute candles.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute candles.
    #[serde(rename = "15m")]
    Minute15,
    /// 30-minute candles.
    #[serde(rename = "30m")]
    Minute30,
    /// 1-hour candles.
    #[serde(rename = "1h")]
    Hour1,
    /// 2-hour candles.
    #[serde(rename = "2h")]
    Hour2,
    /// 4-hour candles.
    #[serde(rename = "4h")]
    Hour4,
}

impl Interval {
    /// Returns the interval length in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Minute1 => 1,
            Self::Minute3 => 3,
            Self::Minute5 => 5,
            Self::Minute15 => 15,
            Self::Minute30 => 30,
            Self::Hour1 => 60,
            Self::Hour2 => 120,
            Self::Hour4 => 240,
        }
    }

    /// Returns the interval length in milliseconds.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.minutes() as i64 * 60_000
    }

    /// Looks up the interval with the given length in minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            1 => Some(Self::Minute1),
            3 => Some(Self::Minute3),
            5 => Some(Self::Minute5),
            15 => Some(Self::Minute15),
            30 => Some(Self::Minute30),
            60 => Some(Self::Hour1),
            120 => Some(Self::Hour2),
            240 => Some(Self::Hour4),
            _ => None,
        }
    }

    /// Returns the interval as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute3 => "3m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour2 => "2h",
            Self::Hour4 => "4h",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute3,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Hour2,
            Self::Hour4,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // Bare integers are minutes, matching how the kline endpoint is queried.
        if let Ok(minutes) = lower.parse::<u32>() {
            return Self::from_minutes(minutes).ok_or_else(|| IntervalParseError(s.to_string()));
        }
        match lower.as_str() {
            "1m" | "m1" => Ok(Self::Minute1),
            "3m" | "m3" => Ok(Self::Minute3),
            "5m" | "m5" => Ok(Self::Minute5),
            "15m" | "m15" => Ok(Self::Minute15),
            "30m" | "m30" => Ok(Self::Minute30),
            "1h" | "h1" | "60m" => Ok(Self::Hour1),
            "2h" | "h2" | "120m" => Ok(Self::Hour2),
            "4h" | "h4" | "240m" => Ok(Self::Hour4),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 1m, 3m, 5m, 15m, 30m, 1h, 2h, 4h",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
