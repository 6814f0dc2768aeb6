//! CLI entry point for the congestion ranking tool.
//!
//! Aggregates a traffic observation log across a pool of workers and reports
//! the most congested lights per time bucket.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use congestion_rank::coordinator::{self, RunConfig};
use congestion_rank::output;
use congestion_rank::ranking::DEFAULT_TOP_N;
use std::ffi::OsStr;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "congestion-rank")]
#[command(about = "Ranks the most congested traffic lights per hour from an observation log", long_about = None)]
struct Cli {
    /// Path to the observation log (one `[date] time light_id car_count` per line)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Number of worker tasks to aggregate with
    #[arg(short, long, default_value_t = default_workers())]
    workers: usize,

    /// How many lights to report per time bucket
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Emit the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/congestion_rank.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("congestion_rank.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        input: cli.input,
        workers: cli.workers,
        top_n: cli.top,
    };

    let report = coordinator::run(&config).await?;

    if cli.json {
        output::print_json(&report)?;
    } else {
        output::print_text(&report);
    }

    Ok(())
}
