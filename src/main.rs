//! `rover-nav` command-line entry point.
//!
//! ```text
//! rover-nav [OPTIONS] <INPUT>
//!
//! Arguments:
//!   <INPUT>            Mission file: plateau bounds, then position/command line pairs
//!
//! Options:
//!   --format <FORMAT>  Output format [default: text] [possible values: text, json]
//! ```
//!
//! Final positions go to stdout, one rover per line. Any failure is reported on stderr
//! with a non-zero exit status and no partial output. Diagnostics are controlled by
//! `RUST_LOG` (e.g. `RUST_LOG=rover_nav=debug`) and also written to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rover_nav::{Mission, Position, RoverInterpreter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// How final positions are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `x y D` line per rover.
    #[default]
    Text,
    /// A JSON array of `{ "x", "y", "heading" }` objects.
    Json,
}

/// Drive rovers across a plateau and report where they end up.
#[derive(Debug, Parser)]
#[command(name = "rover-nav", version)]
struct Cli {
    /// Mission file to run.
    input: PathBuf,

    /// Output format for the final positions.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn render(positions: &[Position], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(positions
            .iter()
            .map(Position::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(positions).context("failed to encode positions as JSON")
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mission = Mission::read(&cli.input)
        .with_context(|| format!("could not load mission from '{}'", cli.input.display()))?;
    debug!(rovers = mission.rovers.len(), "mission loaded");

    let positions = RoverInterpreter::default()
        .run(&mission)
        .context("navigation aborted")?;
    info!(rovers = positions.len(), "all rovers navigated");

    render(&positions, cli.format)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
