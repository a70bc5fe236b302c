//! # Brisket Command-Line Entry Point
//!
//! ```bash
//! brisket analyze data.csv
//! brisket analyze data.parquet --format markdown --output-dir reports
//! ```
//!
//! Set `RUST_LOG=debug` for more detail; logs are also written to the
//! platform data directory.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    brisket::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)
}
