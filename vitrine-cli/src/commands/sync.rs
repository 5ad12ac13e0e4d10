//! Sync command - regenerate the static fallback file from GitHub.
//!
//! This is the data-production half of the system: it pulls a user's
//! repositories from the GitHub API, drops the showcase site's own repo,
//! and writes the feed JSON the fallback source serves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Deserialize;
use tracing::{debug, info, warn};

use vitrine_core::{ProjectCollection, ProjectRecord};

use crate::Cli;

/// GitHub API request timeout.
const GITHUB_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent to the GitHub API.
const USER_AGENT: &str = concat!("Vitrine/", env!("CARGO_PKG_VERSION"));

/// Arguments for the sync command.
#[derive(Args)]
pub struct SyncArgs {
    /// GitHub username whose repositories feed the showcase.
    #[arg(long, short)]
    pub user: String,

    /// Where to write the generated feed.
    #[arg(long, short, default_value = "projects.json")]
    pub output: PathBuf,
}

// ============================================================================
// GitHub API Response
// ============================================================================

/// Raw repository object as returned by the GitHub API.
///
/// Every field is optional; conversion applies the same defaults the
/// pipeline's validator uses, so a synced feed and a validated feed
/// agree on sparse records.
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub topics: Option<Vec<String>>,
}

impl From<GitHubRepo> for ProjectRecord {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            id: repo.id.unwrap_or_default(),
            name: repo.name.unwrap_or_default(),
            full_name: repo.full_name.unwrap_or_default(),
            description: repo.description.unwrap_or_default(),
            html_url: repo.html_url.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            stargazers_count: repo.stargazers_count.unwrap_or_default(),
            forks_count: repo.forks_count.unwrap_or_default(),
            created_at: repo.created_at.unwrap_or_default(),
            updated_at: repo.updated_at.unwrap_or_default(),
            topics: repo.topics.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Sync
// ============================================================================

/// Runs the sync command.
pub async fn run(args: &SyncArgs, cli: &Cli) -> Result<()> {
    info!(user = %args.user, "Syncing repositories from GitHub");

    let repos = fetch_github_repos(&args.user).await?;
    let collection = assemble_collection(repos, &args.user);

    info!(records = collection.len(), "Assembled feed");

    write_collection(&args.output, &collection)?;

    if !cli.quiet {
        println!(
            "Wrote {} projects to {}",
            collection.len(),
            args.output.display()
        );
    }

    Ok(())
}

/// Fetches the user's repositories, most recently updated first.
async fn fetch_github_repos(user: &str) -> Result<Vec<GitHubRepo>> {
    let url =
        format!("https://api.github.com/users/{user}/repos?sort=updated&per_page=100");

    let client = reqwest::Client::builder()
        .timeout(GITHUB_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to create HTTP client")?;

    let mut request = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json");

    // Unauthenticated requests work but are rate limited.
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        debug!("Using GitHub token for authentication");
        request = request.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
    } else {
        warn!("No GitHub token found, using unauthenticated requests");
    }

    let response = request.send().await.context("GitHub request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("GitHub API returned status {status}: {body}");
    }

    let repos: Vec<GitHubRepo> = response
        .json()
        .await
        .context("failed to decode GitHub response")?;

    debug!(count = repos.len(), "Fetched repositories");
    Ok(repos)
}

/// Converts the raw repositories into the feed collection, dropping the
/// user's `{user}.github.io` site repository.
pub fn assemble_collection(repos: Vec<GitHubRepo>, user: &str) -> ProjectCollection {
    let site_repo = format!("{user}.github.io");

    let projects = repos
        .into_iter()
        .filter(|repo| repo.name.as_deref() != Some(site_repo.as_str()))
        .map(ProjectRecord::from)
        .collect();

    ProjectCollection {
        projects,
        last_updated: Utc::now().to_rfc3339(),
    }
}

/// Writes the feed JSON to disk in the wire shape the sources serve.
pub fn write_collection(path: &Path, collection: &ProjectCollection) -> Result<()> {
    let json = serde_json::to_string_pretty(collection)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
