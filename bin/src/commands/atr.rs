//! ATR command implementation.
//!
//! Fetches candles, folds them into coarser bars and reports the Average True Range.

use crate::commands::SourceArgs;
use crate::display::{Format, open_writer, write_report};
use anyhow::{Context, Result};
use barfold_lib::{PipelineConfig, run_atr};
use std::path::Path;

/// Run the ATR pipeline and write the report.
pub(crate) async fn atr(
    config: &PipelineConfig,
    source_args: &SourceArgs,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let source = source_args.build()?;

    let progress = super::spinner(
        quiet,
        format!("Fetching {} x {} candles for {}", config.limit, config.interval, config.symbol),
    );
    let report = run_atr(source.as_ref(), config)
        .await
        .with_context(|| format!("ATR pipeline failed for {}", config.symbol))?;
    progress.finish_with_message(format!(
        "{} bars, {} defined ATR values",
        report.bars.len(),
        report.defined_count()
    ));

    tracing::info!(
        symbol = %report.symbol,
        latest = ?report.latest_atr(),
        "ATR report ready"
    );

    let writer = open_writer(output)?;
    write_report(&report, format, writer)?;

    if let Some(path) = output {
        if !quiet {
            eprintln!("Output written to: {}", path.display());
        }
    }

    Ok(())
}
