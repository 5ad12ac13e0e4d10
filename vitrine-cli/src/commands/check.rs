//! Check command - probe every source without short-circuit.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vitrine_fetch::{HttpAttempter, SourceChain};

use crate::commands::fetch::{build_plan, FetchArgs};
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub endpoints: FetchArgs,
}

/// JSON output for one probed source.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    source: String,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    duration_ms: u128,
}

/// Runs the check command.
pub async fn run(args: &CheckArgs, cli: &Cli) -> Result<()> {
    let plan = build_plan(&args.endpoints)?;
    let chain = SourceChain::new(plan);
    let attempter = HttpAttempter::default();

    let attempts = chain.survey(&attempter).await;

    if cli.format == OutputFormat::Json {
        let outputs: Vec<CheckOutput> = attempts
            .iter()
            .map(|a| CheckOutput {
                source: a.source.clone(),
                available: a.success,
                error: a.error.clone(),
                duration_ms: a.duration.as_millis(),
            })
            .collect();
        let formatter = JsonFormatter::new(cli.pretty);
        println!("{}", formatter.format(&outputs)?);
        return Ok(());
    }

    for attempt in &attempts {
        let status = if attempt.success {
            if cli.no_color {
                "✓ Available".to_string()
            } else {
                "\x1b[32m✓ Available\x1b[0m".to_string()
            }
        } else {
            let reason = attempt.error.as_deref().unwrap_or("unknown");
            if cli.no_color {
                format!("✗ {reason}")
            } else {
                format!("\x1b[31m✗\x1b[0m {reason}")
            }
        };

        println!("{:<10} {}", attempt.source, status);

        if cli.verbose {
            println!("  took {:?}", attempt.duration);
        }
    }

    Ok(())
}
