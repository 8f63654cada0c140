//! Binary crate for the `forecast` command-line tool.
//!
//! Fetches the daily forecast for the built-in location and prints
//! one summary line per day. Diagnostics go to stderr, filtered by `RUST_LOG`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
