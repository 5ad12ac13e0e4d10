// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Vitrine CLI - project feed acquisition from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Fetch the feed from the default local endpoints
//! vitrine
//!
//! # Fetch from a deployed site
//! vitrine fetch --base-url https://example.github.io/portfolio
//!
//! # JSON output
//! vitrine --format json --pretty
//!
//! # Regenerate the static fallback file from GitHub
//! vitrine sync --user someone --output projects.json
//!
//! # Probe every source without short-circuit
//! vitrine check
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, fetch, sync};

// ============================================================================
// CLI Definition
// ============================================================================

/// Vitrine CLI - project feed acquisition.
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Project showcase feed CLI")]
#[command(long_about = r#"
Vitrine acquires the project feed a showcase site renders: it tries the
primary API endpoint, falls back to the static JSON file, repairs any
diagnostic trailer the host appended, and validates the payload.

Examples:
  vitrine                                  # Fetch from http://localhost:8080
  vitrine fetch --base-url https://x.dev   # Fetch from a deployed site
  vitrine --format json --pretty           # JSON output
  vitrine sync --user someone              # Regenerate projects.json
  vitrine check                            # Probe every source
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'fetch' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and validate the project feed (default if no command specified).
    #[command(visible_alias = "f")]
    Fetch(fetch::FetchArgs),

    /// Regenerate the static fallback file from the GitHub API.
    #[command(visible_alias = "s")]
    Sync(sync::SyncArgs),

    /// Probe every configured source and report each result.
    #[command(visible_alias = "c")]
    Check(check::CheckArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Every configured source failed.
    SourcesExhausted = 2,
    /// The payload was empty, malformed, or mis-shaped.
    InvalidPayload = 3,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("vitrine=debug,info")
    } else {
        EnvFilter::new("vitrine=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Fetch(args)) => fetch::run(args, &cli).await,
        Some(Commands::Sync(args)) => sync::run(args, &cli).await,
        Some(Commands::Check(args)) => check::run(args, &cli).await,
        None => {
            // Default to fetch command
            fetch::run(&fetch::FetchArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
