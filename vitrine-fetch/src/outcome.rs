//! Pipeline outcome and activation state.
//!
//! One activation owns exactly one [`PipelineOutcome`]. It starts
//! `Pending`, is written once by whichever stage terminates, and is
//! read-only afterwards. The presentation layer observes the four
//! derived values; it never mutates them.

use vitrine_core::{ProjectCollection, ProjectRecord};

use crate::error::FetchError;
use crate::pipeline::FeedPipeline;

// ============================================================================
// Pipeline Outcome
// ============================================================================

/// The externally observable state of one pipeline activation.
///
/// State machine: `Pending → Succeeded` or `Pending → Failed`, both
/// terminal. No edges leave a terminal state within one activation.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// No terminal result yet.
    Pending,
    /// All stages passed; carries the validated collection.
    Succeeded(ProjectCollection),
    /// Some stage failed; carries the typed failure so consumers can
    /// discriminate causes.
    Failed(FetchError),
}

impl PipelineOutcome {
    /// Returns true while no terminal result has been reached.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true once the outcome is `Succeeded` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Returns the displayable failure message, if the activation failed.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }

    /// Returns the typed failure, if the activation failed.
    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the validated records. Empty while pending or failed.
    pub fn records(&self) -> &[ProjectRecord] {
        match self {
            Self::Succeeded(collection) => &collection.projects,
            _ => &[],
        }
    }

    /// Returns the feed timestamp. Empty while pending or failed, or if
    /// the source omitted it.
    pub fn last_updated(&self) -> &str {
        match self {
            Self::Succeeded(collection) => &collection.last_updated,
            _ => "",
        }
    }
}

impl From<Result<ProjectCollection, FetchError>> for PipelineOutcome {
    fn from(result: Result<ProjectCollection, FetchError>) -> Self {
        match result {
            Ok(collection) => Self::Succeeded(collection),
            Err(error) => Self::Failed(error),
        }
    }
}

// ============================================================================
// Activation
// ============================================================================

/// One end-to-end run of the pipeline.
///
/// Owns the outcome and enforces the single write: [`Activation::run`]
/// performs the one-shot transition and is a no-op once the outcome is
/// terminal. A fresh activation starts over from `Pending`. Dropping the
/// future returned by `run` abandons the in-flight request and discards
/// any eventual result.
#[derive(Debug)]
pub struct Activation {
    outcome: PipelineOutcome,
}

impl Activation {
    /// Creates a pending activation.
    pub fn new() -> Self {
        Self {
            outcome: PipelineOutcome::Pending,
        }
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &PipelineOutcome {
        &self.outcome
    }

    /// Drives the pipeline once and records the terminal outcome.
    ///
    /// No-op if this activation already terminated; there is no
    /// automatic re-trigger, polling, or retry.
    pub async fn run(&mut self, pipeline: &FeedPipeline) {
        if self.outcome.is_terminal() {
            return;
        }
        self.outcome = pipeline.activate().await;
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_accessors() {
        let outcome = PipelineOutcome::Pending;
        assert!(outcome.is_loading());
        assert!(!outcome.is_terminal());
        assert!(outcome.error_message().is_none());
        assert!(outcome.failure().is_none());
        assert!(outcome.records().is_empty());
        assert_eq!(outcome.last_updated(), "");
    }

    #[test]
    fn test_succeeded_accessors() {
        let collection = ProjectCollection {
            projects: vec![ProjectRecord::default()],
            last_updated: "2025-01-01".to_string(),
        };
        let outcome = PipelineOutcome::Succeeded(collection);

        assert!(!outcome.is_loading());
        assert!(outcome.error_message().is_none());
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.last_updated(), "2025-01-01");
    }

    #[test]
    fn test_failed_preserves_kind() {
        let outcome = PipelineOutcome::Failed(FetchError::EmptyPayload);

        assert!(!outcome.is_loading());
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("Empty response received")
        );
        assert!(matches!(outcome.failure(), Some(FetchError::EmptyPayload)));
        assert!(outcome.records().is_empty());
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: PipelineOutcome = Ok(ProjectCollection::new()).into();
        assert!(matches!(ok, PipelineOutcome::Succeeded(_)));

        let err: PipelineOutcome = Err(FetchError::NotAnObject).into();
        assert!(matches!(err, PipelineOutcome::Failed(FetchError::NotAnObject)));
    }

    #[test]
    fn test_new_activation_is_pending() {
        let activation = Activation::new();
        assert!(activation.outcome().is_loading());
    }
}
