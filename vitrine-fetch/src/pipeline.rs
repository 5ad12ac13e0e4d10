//! The feed pipeline.
//!
//! Wires the stages together: resolve the source chain, sanitize the
//! body, decode, validate, and project the result into a
//! [`PipelineOutcome`]. Each stage either passes a value forward or
//! short-circuits with a typed [`FetchError`].

use tracing::{debug, info, instrument, warn};

use vitrine_core::ProjectCollection;

use crate::chain::SourceChain;
use crate::error::FetchError;
use crate::outcome::PipelineOutcome;
use crate::parse::{decode, validate};
use crate::sanitize::sanitize;
use crate::source::{HttpAttempter, SourceAttempter, SourcePlan};

// ============================================================================
// Feed Pipeline
// ============================================================================

/// Runs the acquisition pipeline once per activation.
pub struct FeedPipeline {
    chain: SourceChain,
    attempter: Box<dyn SourceAttempter>,
}

impl FeedPipeline {
    /// Creates a pipeline over the given plan with the HTTP attempter.
    pub fn new(plan: SourcePlan) -> Self {
        Self::with_attempter(plan, Box::new(HttpAttempter::default()))
    }

    /// Creates a pipeline with a custom attempter. Tests use this to
    /// fake the network.
    pub fn with_attempter(plan: SourcePlan, attempter: Box<dyn SourceAttempter>) -> Self {
        Self {
            chain: SourceChain::new(plan),
            attempter,
        }
    }

    /// Drives all stages once and projects the result.
    ///
    /// Never returns `Pending`: the returned outcome is terminal.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> PipelineOutcome {
        let result = self.acquire().await;
        match &result {
            Ok(collection) => {
                info!(records = collection.len(), "Pipeline succeeded");
            }
            Err(error) => warn!(error = %error, "Pipeline failed"),
        }
        result.into()
    }

    /// Runs chain → sanitize → decode → validate.
    async fn acquire(&self) -> Result<ProjectCollection, FetchError> {
        let resolved = self.chain.resolve(self.attempter.as_ref()).await?;
        debug!(source = %resolved.source, "Body resolved");

        let repaired = sanitize(&resolved.body)?;
        let value = decode(&repaired)?;
        validate(&value)
    }
}

// ============================================================================
// Tests
// ============================================================================
