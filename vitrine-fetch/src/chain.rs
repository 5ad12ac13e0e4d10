//! Source chain resolution.
//!
//! The chain tries sources in plan order via the attempter, stopping at
//! the first success. A failed source is never retried; if every source
//! fails the chain yields [`FetchError::SourcesExhausted`] carrying the
//! last failure.

use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::error::{FetchError, SourceError};
use crate::source::{Source, SourceAttempter, SourcePlan};

// ============================================================================
// Source Attempt
// ============================================================================

/// Record of a single source attempt.
#[derive(Debug, Clone)]
pub struct SourceAttempt {
    /// Label of the source that was attempted.
    pub source: String,
    /// Whether the attempt succeeded.
    pub success: bool,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
}

impl SourceAttempt {
    /// Creates a successful attempt record.
    pub fn success(source: impl Into<String>, duration: Duration) -> Self {
        Self {
            source: source.into(),
            success: true,
            error: None,
            duration,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(source: impl Into<String>, error: &SourceError, duration: Duration) -> Self {
        Self {
            source: source.into(),
            success: false,
            error: Some(error.to_string()),
            duration,
        }
    }
}

// ============================================================================
// Resolved Body
// ============================================================================

/// The raw body returned by the first source that succeeded.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Raw response body text, before sanitization.
    pub body: String,
    /// Label of the source that served it.
    pub source: String,
}

// ============================================================================
// Source Chain
// ============================================================================

/// Tries an ordered list of sources until one succeeds.
pub struct SourceChain {
    plan: SourcePlan,
}

impl SourceChain {
    /// Creates a chain over the given plan.
    pub fn new(plan: SourcePlan) -> Self {
        Self { plan }
    }

    /// Returns the sources in attempt order.
    pub fn sources(&self) -> &[Source] {
        self.plan.sources()
    }

    /// Resolves the chain: tries each source in order, returning the
    /// first successful body.
    ///
    /// Attempts are strictly sequential; on the first success the
    /// remaining sources are never contacted.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::SourcesExhausted`] if every source fails,
    /// carrying the last attempt's failure message. An empty plan
    /// exhausts immediately.
    #[instrument(skip(self, attempter), fields(sources = self.plan.len()))]
    pub async fn resolve(
        &self,
        attempter: &dyn SourceAttempter,
    ) -> Result<Resolved, FetchError> {
        if self.plan.is_empty() {
            return Err(FetchError::SourcesExhausted {
                label: "none".to_string(),
                message: "No sources configured".to_string(),
            });
        }

        info!(count = self.plan.len(), "Resolving source chain");

        let mut last_failure: Option<(String, String)> = None;

        for source in self.plan.sources() {
            let start = Instant::now();
            debug!(source = %source, "Attempting source");

            match attempter.attempt(source).await {
                Ok(body) => {
                    info!(
                        source = %source.label,
                        bytes = body.len(),
                        duration = ?start.elapsed(),
                        "Source succeeded"
                    );
                    return Ok(Resolved {
                        body,
                        source: source.label.clone(),
                    });
                }
                Err(error) => {
                    warn!(
                        source = %source.label,
                        error = %error,
                        duration = ?start.elapsed(),
                        "Source failed"
                    );
                    last_failure = Some((source.label.clone(), error.to_string()));
                }
            }
        }

        // Unreachable only for an empty plan, which returned above.
        let (label, message) = last_failure.unwrap_or_else(|| {
            ("none".to_string(), "No sources configured".to_string())
        });

        warn!(source = %label, "All sources failed");
        Err(FetchError::SourcesExhausted { label, message })
    }

    /// Attempts every source in the plan without short-circuit and
    /// reports each result. Diagnostic use only; the pipeline itself
    /// always goes through [`SourceChain::resolve`].
    pub async fn survey(&self, attempter: &dyn SourceAttempter) -> Vec<SourceAttempt> {
        let mut attempts = Vec::with_capacity(self.plan.len());

        for source in self.plan.sources() {
            let start = Instant::now();
            match attempter.attempt(source).await {
                Ok(_) => attempts.push(SourceAttempt::success(&source.label, start.elapsed())),
                Err(error) => {
                    attempts.push(SourceAttempt::failure(&source.label, &error, start.elapsed()));
                }
            }
        }

        attempts
    }
}

// ============================================================================
// Tests
// ============================================================================
