//! Output format abstraction.

use barfold_aggregate::Bar;
use barfold_types::BarfoldError;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Bars and indicator values are misaligned.
    #[error("Length mismatch: {bars} bars but {values} indicator values")]
    LengthMismatch {
        /// Number of bars.
        bars: usize,
        /// Number of indicator values.
        values: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FormatError> for BarfoldError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(e) => Self::Io(e),
            FormatError::Json(e) => Self::Json(e),
            other => Self::Format(other.to_string()),
        }
    }
}

/// One aggregated bar joined with its ATR value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtrRow {
    /// Bar open time in epoch milliseconds.
    pub open_time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Total volume.
    pub volume: f64,
    /// ATR value, `None` during warm-up.
    pub atr: Option<f64>,
}

impl AtrRow {
    /// Joins bars with ATR values by index.
    ///
    /// # Errors
    ///
    /// Returns an error if the two slices differ in length.
    pub fn join(bars: &[Bar], atr: &[f64]) -> Result<Vec<Self>, FormatError> {
        if bars.len() != atr.len() {
            return Err(FormatError::LengthMismatch {
                bars: bars.len(),
                values: atr.len(),
            });
        }
        Ok(bars
            .iter()
            .zip(atr)
            .map(|(bar, &value)| Self {
                open_time: bar.open_time,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                atr: (!value.is_nan()).then_some(value),
            })
            .collect())
    }
}

/// Renders an epoch-millisecond timestamp as ISO 8601 UTC.
pub(crate) fn format_time(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    )
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes aggregated bars to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError>;

    /// Writes aggregated bars with their ATR values to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are misaligned or writing fails.
    fn write_atr<W: Write + Send>(
        &self,
        bars: &[Bar],
        atr: &[f64],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
