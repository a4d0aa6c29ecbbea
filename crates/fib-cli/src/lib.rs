//! Command-line driver for fibcompare.
//!
//! Computes the Fibonacci number at a fixed index with every algorithm and
//! prints one line per algorithm to stdout. Diagnostics go to stderr.

pub mod logging;
pub mod report;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

pub use report::{report, INDEX};

#[derive(Parser, Debug)]
#[command(name = "fibcompare")]
#[command(about = "Compare iterative and recursive Fibonacci", long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    debug!(?cli, "parsed command line");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(INDEX, &mut out).context("failed to write results to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
