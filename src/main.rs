//! promptline CLI
//!
//! Interactive terminal prompt: each submitted line runs through a
//! simulated background task while the UI stays live.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use promptline::tui::run::{RunConfig, run};

#[derive(Parser)]
#[command(name = "promptline")]
#[command(about = "Interactive prompt that runs each submission through a background task")]
#[command(version)]
struct Cli {
    /// Counter tick interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Spinner animation interval in milliseconds
    #[arg(long, default_value_t = 100)]
    spinner_ms: u64,

    /// Simulated task latency in milliseconds
    #[arg(long, default_value_t = 2000)]
    latency_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = RunConfig {
        tick_interval: Duration::from_millis(cli.tick_ms),
        spinner_interval: Duration::from_millis(cli.spinner_ms),
        task_latency: Duration::from_millis(cli.latency_ms),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
