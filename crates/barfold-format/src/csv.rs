//! CSV output format.

use barfold_aggregate::Bar;
use std::io::Write;

use crate::formatter::format_time;
use crate::{AtrRow, FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "timestamp{d}open{d}high{d}low{d}close{d}volume{d}candle_count"
            )?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                format_time(bar.open_time),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume,
                bar.candle_count
            )?;
        }

        Ok(())
    }

    fn write_atr<W: Write + Send>(
        &self,
        bars: &[Bar],
        atr: &[f64],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let rows = AtrRow::join(bars, atr)?;
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}open{d}high{d}low{d}close{d}atr")?;
        }

        for row in rows {
            let atr = row.atr.map(|v| v.to_string()).unwrap_or_default();
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                format_time(row.open_time),
                row.open,
                row.high,
                row.low,
                row.close,
                atr
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_bar() -> Bar {
        Bar::new(1_705_321_800_000, 101.5, 103.0, 100.25, 102.0, 450.0, 5)
    }

    #[test]
    fn test_csv_bars() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp,open,high,low,close,volume,candle_count"));
        assert!(result.contains("2024-01-15T12:30:00Z,101.5,103,100.25,102,450,5"));
    }

    #[test]
    fn test_csv_atr_warmup_is_empty() {
        let formatter = CsvFormatter::new().with_header(false);
        let bars = [create_test_bar(), create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_atr(&bars, &[f64::NAN, 1.25], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(",102,"));
        assert!(lines[1].ends_with(",102,1.25"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp\topen\thigh"));
    }

    #[test]
    fn test_custom_delimiter() {
        let formatter = CsvFormatter::new().with_delimiter(';');
        let mut output = Cursor::new(Vec::new());

        formatter.write_atr(&[create_test_bar()], &[0.5], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("timestamp;open;high;low;close;atr"));
        assert_eq!(formatter.extension(), "csv");
    }
}
