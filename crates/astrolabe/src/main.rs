//! # Astrolabe
//!
//! Precomputes the legacy Weathering universe into a flat catalog, and
//! answers questions about single planets or finished catalogs.
//!
//! ## Usage
//!
//! ```bash
//! astrolabe generate universe.txt 8
//! astrolabe generate toy.txt 2 --config toy.toml --json toy.json
//! astrolabe inspect 'Weathering.MapOfPlanet#=1,4=14,93=24,31'
//! astrolabe query universe.txt --planet-type gaia --sort-by size --desc --limit 10
//! astrolabe verify
//! ```
//!
//! Data goes to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`). Usage errors exit with 2, every other failure with 1.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match commands::run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
