//! Resample command implementation.

use crate::commands::SourceArgs;
use crate::display::{Format, open_writer, write_bars};
use anyhow::{Context, Result};
use barfold_lib::{PipelineConfig, run_resample};
use std::path::Path;

/// Fetch candles and write the aggregated bars.
pub(crate) async fn resample(
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
    let bars = run_resample(source.as_ref(), config)
        .await
        .with_context(|| format!("Resampling failed for {}", config.symbol))?;
    progress.finish_with_message(format!(
        "{} bars of {}m",
        bars.len(),
        config.aggregator().target_minutes(config.interval)
    ));

    let writer = open_writer(output)?;
    write_bars(&bars, format, writer)?;

    if let Some(path) = output {
        if !quiet {
            eprintln!("Output written to: {}", path.display());
        }
    }

    Ok(())
}
