//! Display utilities and output formatting for the barfold CLI.

use anyhow::{Context, Result};
use barfold_lib::prelude::*;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for reports.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file format, or `None` for the human-readable table.
    pub(crate) const fn output_format(self) -> Option<OutputFormat> {
        match self {
            Self::Table => None,
            Self::Csv => Some(OutputFormat::Csv),
            Self::Json => Some(OutputFormat::Json),
            Self::Ndjson => Some(OutputFormat::Ndjson),
        }
    }
}

/// Opens `output` for writing, or stdout when no path is given.
pub(crate) fn open_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

fn format_time(bar: &Bar) -> String {
    bar.datetime().map_or_else(
        || bar.open_time.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Write an ATR report in the specified format.
pub(crate) fn write_report<W: Write + Send>(
    report: &AtrReport,
    format: Format,
    mut writer: W,
) -> Result<()> {
    match format.output_format() {
        Some(OutputFormat::Csv) => {
            CsvFormatter::new().write_atr(&report.bars, &report.atr, &mut writer)?;
        }
        Some(OutputFormat::Json) => {
            JsonFormatter::new().write_atr(&report.bars, &report.atr, &mut writer)?;
        }
        Some(OutputFormat::Ndjson) => {
            JsonFormatter::ndjson().write_atr(&report.bars, &report.atr, &mut writer)?;
        }
        None => {
            writeln!(
                writer,
                "{} ATR({}) on {}m bars ({} x {})",
                report.symbol,
                report.period,
                report.bar_minutes(),
                report.factor,
                report.interval
            )?;
            writeln!(
                writer,
                "{:<17} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "ATR"
            )?;
            writeln!(writer, "{}", "-".repeat(83))?;
            for (bar, atr) in report.bars.iter().zip(&report.atr) {
                let atr = if atr.is_nan() {
                    "-".to_string()
                } else {
                    format!("{atr:.6}")
                };
                writeln!(
                    writer,
                    "{:<17} {:>12} {:>12} {:>12} {:>12} {:>12}",
                    format_time(bar),
                    bar.open,
                    bar.high,
                    bar.low,
                    bar.close,
                    atr
                )?;
            }
            let latest = report
                .latest_atr()
                .map_or_else(|| "undefined".to_string(), |v| format!("{v:.6}"));
            writeln!(writer, "\nLatest ATR: {latest}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write aggregated bars in the specified format.
pub(crate) fn write_bars<W: Write + Send>(bars: &[Bar], format: Format, mut writer: W) -> Result<()> {
    match format.output_format() {
        Some(OutputFormat::Csv) => CsvFormatter::new().write_bars(bars, &mut writer)?,
        Some(OutputFormat::Json) => JsonFormatter::new().write_bars(bars, &mut writer)?,
        Some(OutputFormat::Ndjson) => JsonFormatter::ndjson().write_bars(bars, &mut writer)?,
        None => {
            writeln!(
                writer,
                "{:<17} {:>12} {:>12} {:>12} {:>12} {:>14} {:>6}",
                "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME", "N"
            )?;
            writeln!(writer, "{}", "-".repeat(92))?;
            for bar in bars {
                writeln!(
                    writer,
                    "{:<17} {:>12} {:>12} {:>12} {:>12} {:>14} {:>6}",
                    format_time(bar),
                    bar.open,
                    bar.high,
                    bar.low,
                    bar.close,
                    bar.volume,
                    bar.candle_count
                )?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AtrReport {
        AtrReport {
            symbol: "SOLUSDT".to_string(),
            interval: Interval::Minute1,
            factor: 5,
            period: 1,
            bars: vec![
                Bar::new(1_704_067_200_000, 1.0, 2.0, 0.5, 1.5, 10.0, 5),
                Bar::new(1_704_067_500_000, 1.5, 2.5, 1.0, 2.0, 12.0, 5),
            ],
            atr: vec![f64::NAN, 1.5],
        }
    }

    #[test]
    fn test_table_report() {
        let mut out = Vec::new();
        write_report(&report(), Format::Table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("SOLUSDT ATR(1) on 5m bars"));
        assert!(text.contains("2024-01-01 00:00"));
        assert!(text.contains("Latest ATR: 1.500000"));
    }

    #[test]
    fn test_csv_report() {
        let mut out = Vec::new();
        write_report(&report(), Format::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().last().unwrap().ends_with(",1.5"));
    }

    #[test]
    fn test_bars_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.ndjson");
        let writer = open_writer(Some(&path)).unwrap();
        write_bars(&report().bars, Format::Ndjson, writer).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
