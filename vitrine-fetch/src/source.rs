//! Source descriptors and the attempter seam.
//!
//! A [`Source`] is a labeled endpoint the chain may fetch the feed from.
//! Sources are plain data; the trait seam sits at [`SourceAttempter`],
//! which performs one bounded GET and classifies the outcome. Tests swap
//! the attempter; production uses [`HttpAttempter`].

use async_trait::async_trait;
use url::Url;

use crate::error::SourceError;
use crate::http::HttpClient;

/// Endpoint path of the primary (API) source.
pub const PRIMARY_PATH: &str = "api/projects";

/// Endpoint path of the fallback (static file) source.
pub const FALLBACK_PATH: &str = "api/projects.json";

// ============================================================================
// Source
// ============================================================================

/// A network endpoint the pipeline may fetch project data from.
#[derive(Debug, Clone)]
pub struct Source {
    /// Short label used in logs and failure messages ("primary",
    /// "fallback").
    pub label: String,
    /// Full endpoint URL.
    pub url: Url,
}

impl Source {
    /// Creates a source from a label and an already-parsed URL.
    pub fn new(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.url)
    }
}

// ============================================================================
// Source Plan
// ============================================================================

/// The ordered list of sources one activation will try.
#[derive(Debug, Clone)]
pub struct SourcePlan {
    sources: Vec<Source>,
}

impl SourcePlan {
    /// Creates a plan from an explicit ordered source list.
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Builds the standard primary + fallback plan from a base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the base URL is invalid or cannot be
    /// joined with the endpoint paths.
    pub fn for_base(base: &str) -> Result<Self, url::ParseError> {
        // Url::join treats a base without a trailing slash as a file,
        // so normalize before joining the endpoint paths.
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        Ok(Self::new(vec![
            Source::new("primary", base.join(PRIMARY_PATH)?),
            Source::new("fallback", base.join(FALLBACK_PATH)?),
        ]))
    }

    /// Returns the sources in attempt order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Returns the number of sources in the plan.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the plan has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// ============================================================================
// Source Attempter
// ============================================================================

/// Performs one bounded fetch against a source.
///
/// An attempt fails if the transport errors or the response status is
/// outside the success range; on success it yields the raw body text.
/// This is the pipeline's only suspension point.
#[async_trait]
pub trait SourceAttempter: Send + Sync {
    /// Attempts a single fetch of the given source.
    async fn attempt(&self, source: &Source) -> Result<String, SourceError>;
}

/// Production attempter backed by [`HttpClient`].
#[derive(Debug, Clone, Default)]
pub struct HttpAttempter {
    client: HttpClient,
}

impl HttpAttempter {
    /// Creates an attempter over the given client.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceAttempter for HttpAttempter {
    async fn attempt(&self, source: &Source) -> Result<String, SourceError> {
        let response = self.client.get(source.url.as_str()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        Ok(body)
    }
}

// ============================================================================
// Tests
// ============================================================================
