//! barfold CLI - resample exchange candles and compute the Average True Range.

use anyhow::Result;
use barfold_lib::Interval;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

use commands::SourceArgs;
use display::Format;

#[derive(Parser)]
#[command(name = "barfold")]
#[command(about = "Resample exchange candles into coarser bars and compute ATR", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch candles, aggregate them and compute the Average True Range
    Atr {
        /// Instrument symbol (e.g., SOLUSDT, BTCUSDT)
        symbol: String,

        /// Number of base candles to fetch
        #[arg(short, long, default_value = "200")]
        limit: usize,

        /// Base candle interval (1, 5, 15m, 1h, ...)
        #[arg(short, long, default_value = "1")]
        interval: Interval,

        /// Base candles per aggregated bar
        #[arg(long, default_value = "5")]
        factor: usize,

        /// Number of aggregated bars (0 derives it from the candle count)
        #[arg(long, default_value = "0")]
        length: usize,

        /// ATR smoothing period
        #[arg(short, long, default_value = "14")]
        period: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Fetch candles and write the aggregated bars
    Resample {
        /// Instrument symbol (e.g., SOLUSDT, BTCUSDT)
        symbol: String,

        /// Number of base candles to fetch
        #[arg(short, long, default_value = "200")]
        limit: usize,

        /// Base candle interval (1, 5, 15m, 1h, ...)
        #[arg(short, long, default_value = "1")]
        interval: Interval,

        /// Base candles per aggregated bar
        #[arg(long, default_value = "5")]
        factor: usize,

        /// Number of aggregated bars (0 derives it from the candle count)
        #[arg(long, default_value = "0")]
        length: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Atr {
            symbol,
            limit,
            interval,
            factor,
            length,
            period,
            format,
            output,
            source,
        } => {
            let config = barfold_lib::PipelineConfig::new(symbol)
                .with_limit(limit)
                .with_interval(interval)
                .with_factor(factor)
                .with_length(length)
                .with_period(period);
            commands::atr::atr(&config, &source, format, output.as_deref(), cli.quiet).await
        }
        Commands::Resample {
            symbol,
            limit,
            interval,
            factor,
            length,
            format,
            output,
            source,
        } => {
            let config = barfold_lib::PipelineConfig::new(symbol)
                .with_limit(limit)
                .with_interval(interval)
                .with_factor(factor)
                .with_length(length);
            commands::resample::resample(&config, &source, format, output.as_deref(), cli.quiet)
                .await
        }
    }
}
