//! RoadNet CLI - shortest-path routing over simulated road networks.
//!
//! # Commands
//!
//! - `roadnet demo` - route the fixed demo network with the adaptive
//!   router and export per-route metrics
//! - `roadnet compare` - generate random networks and compare the static
//!   baseline against the adaptive router, CSV report included
//!
//! # Examples
//!
//! ```bash
//! # Route the demo network with a fixed congestion seed
//! roadnet demo --seed 42
//!
//! # 100 seeded comparison runs written to results/compare_metrics.csv
//! roadnet compare --runs 100 --seed 7
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{compare, demo};

/// RoadNet - static vs adaptive shortest-path routing experiments
#[derive(Parser)]
#[command(name = "roadnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route the built-in demo network (A..D) with the adaptive router
    Demo {
        /// Output CSV for route metrics
        #[arg(short, long, default_value = "results/metrics.csv")]
        output: PathBuf,

        /// Deterministic congestion seed (entropy-seeded when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Compare static and adaptive routing over random networks
    Compare {
        /// Number of comparison runs
        #[arg(short, long, default_value = "100")]
        runs: usize,

        /// Output CSV for comparison results
        #[arg(short, long, default_value = "results/compare_metrics.csv")]
        output: PathBuf,

        /// Deterministic seed for generation and congestion
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Demo { output, seed } => demo::execute(&output, seed),
        Commands::Compare { runs, output, seed } => compare::execute(runs, &output, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
