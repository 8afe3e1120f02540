//! Ivy CLI - command-line host for the interval-graph recognizer.
//!
//! Loads JSON graph fixtures and prints verdicts. The exit code
//! mirrors the verdict so scripts can branch on it: 0 for an interval
//! graph, 1 for a rejection, 2 for a usage or fixture error.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "ivy")]
#[command(version)]
#[command(about = "Interval-graph recognition over JSON graph fixtures", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a graph fixture is an interval graph
    Check {
        /// Path to the JSON fixture
        file: PathBuf,

        /// Output the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the recognizer's intermediate artifacts for a fixture
    Inspect {
        /// Path to the JSON fixture
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Check { file, json } => commands::check(&file, json),
        Commands::Inspect { file } => commands::inspect(&file).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}
