//! CLI command implementations.

pub(crate) mod atr;
pub(crate) mod resample;

use anyhow::{Context, Result};
use barfold_lib::{CandleSource, ClientConfig, FileSource, KlineClient};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Where candles come from.
#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
    /// Read klines from a JSON file instead of the exchange
    #[arg(long, conflicts_with = "base_url")]
    pub(crate) input: Option<PathBuf>,

    /// Exchange REST base URL
    #[arg(long)]
    pub(crate) base_url: Option<String>,
}

impl SourceArgs {
    /// Builds the candle source these arguments describe.
    pub(crate) fn build(&self) -> Result<Box<dyn CandleSource>> {
        if let Some(path) = &self.input {
            tracing::debug!(path = %path.display(), "reading candles from file");
            return Ok(Box::new(FileSource::new(path)));
        }

        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        let client = KlineClient::new(config).context("Failed to build HTTP client")?;
        Ok(Box::new(client))
    }
}

/// Starts a spinner on stderr, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
