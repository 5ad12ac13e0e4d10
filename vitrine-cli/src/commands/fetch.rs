//! Fetch command - run one activation and display the feed.

use anyhow::Result;
use clap::Args;
use tracing::info;
use url::Url;

use vitrine_fetch::{
    Activation, FeedPipeline, FetchError, PipelineOutcome, Source, SourcePlan,
};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Default base URL of a locally served showcase site.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// Base URL to derive the primary and fallback endpoints from.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Explicit primary endpoint URL (overrides --base-url).
    #[arg(long)]
    pub primary: Option<String>,

    /// Explicit fallback endpoint URL (overrides --base-url).
    #[arg(long)]
    pub fallback: Option<String>,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            primary: None,
            fallback: None,
        }
    }
}

/// Builds the source plan from the endpoint arguments.
pub fn build_plan(args: &FetchArgs) -> Result<SourcePlan> {
    if args.primary.is_none() && args.fallback.is_none() {
        return Ok(SourcePlan::for_base(&args.base_url)?);
    }

    let mut sources = Vec::new();
    if let Some(primary) = &args.primary {
        sources.push(Source::new("primary", Url::parse(primary)?));
    }
    if let Some(fallback) = &args.fallback {
        sources.push(Source::new("fallback", Url::parse(fallback)?));
    }
    Ok(SourcePlan::new(sources))
}

/// Runs the fetch command.
pub async fn run(args: &FetchArgs, cli: &Cli) -> Result<()> {
    let plan = build_plan(args)?;
    info!(sources = plan.len(), "Fetching project feed");

    let pipeline = FeedPipeline::new(plan);
    let mut activation = Activation::new();
    activation.run(&pipeline).await;

    output_outcome(activation.outcome(), cli)?;

    if let Some(failure) = activation.outcome().failure() {
        std::process::exit(exit_code_for(failure) as i32);
    }

    Ok(())
}

/// Formats and prints the terminal outcome.
fn output_outcome(outcome: &PipelineOutcome, cli: &Cli) -> Result<()> {
    match outcome {
        PipelineOutcome::Succeeded(collection) => match cli.format {
            OutputFormat::Json => {
                let formatter = JsonFormatter::new(cli.pretty);
                println!("{}", formatter.format(collection)?);
            }
            OutputFormat::Text => {
                let formatter = TextFormatter::new(!cli.no_color);
                println!("{}", formatter.format_collection(collection));
            }
        },
        PipelineOutcome::Failed(error) => match cli.format {
            OutputFormat::Json => {
                let formatter = JsonFormatter::new(cli.pretty);
                println!("{}", formatter.format_error(&error.to_string())?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    let formatter = TextFormatter::new(!cli.no_color);
                    eprintln!("{}", formatter.format_error(&error.to_string()));
                }
            }
        },
        // activate() always terminates; a pending outcome here means the
        // activation was never run.
        PipelineOutcome::Pending => anyhow::bail!("pipeline was not activated"),
    }

    Ok(())
}

/// Maps a failure kind to an exit code.
fn exit_code_for(error: &FetchError) -> ExitCode {
    match error {
        FetchError::SourcesExhausted { .. } => ExitCode::SourcesExhausted,
        FetchError::EmptyPayload
        | FetchError::Decode { .. }
        | FetchError::NotAnObject
        | FetchError::ProjectsNotArray => ExitCode::InvalidPayload,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plan_from_base() {
        let plan = build_plan(&FetchArgs::default()).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.sources()[0].url.as_str(),
            "http://localhost:8080/api/projects"
        );
    }

    #[test]
    fn test_build_plan_explicit_endpoints() {
        let args = FetchArgs {
            base_url: DEFAULT_BASE_URL.to_string(),
            primary: Some("https://api.example.com/feed".to_string()),
            fallback: None,
        };
        let plan = build_plan(&args).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.sources()[0].label, "primary");
    }

    #[test]
    fn test_build_plan_invalid_url() {
        let args = FetchArgs {
            base_url: "not a url".to_string(),
            primary: None,
            fallback: None,
        };
        assert!(build_plan(&args).is_err());
    }

    #[test]
    fn test_exit_codes_by_kind() {
        let exhausted = FetchError::SourcesExhausted {
            label: "fallback".to_string(),
            message: "HTTP status 404 Not Found".to_string(),
        };
        assert_eq!(exit_code_for(&exhausted) as i32, 2);
        assert_eq!(exit_code_for(&FetchError::EmptyPayload) as i32, 3);
        assert_eq!(exit_code_for(&FetchError::NotAnObject) as i32, 3);
        assert_eq!(exit_code_for(&FetchError::ProjectsNotArray) as i32, 3);
    }
}
