//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Pipeline Error
// ============================================================================

/// Terminal failure taxonomy for one pipeline activation.
///
/// Every stage converts its internal fault into one of these kinds before
/// returning; nothing unclassified escapes the pipeline. The variant is
/// preserved through to the consumer so callers can discriminate causes;
/// the Display string is what the presentation layer shows.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every configured source was unreachable or returned a non-success
    /// status. Carries the label and failure of the last attempted source.
    ///
    /// The field is named `label`, not `source`: thiserror infers a field
    /// called `source` as the error's cause and would demand
    /// `std::error::Error` of it.
    #[error("All sources failed, last ({label}): {message}")]
    SourcesExhausted {
        /// Label of the last source attempted.
        label: String,
        /// The last attempt's failure, as text.
        message: String,
    },

    /// The sanitized body had zero length.
    #[error("Empty response received")]
    EmptyPayload,

    /// The body was not syntactically valid JSON after sanitization.
    #[error("Invalid JSON: {message}")]
    Decode {
        /// The underlying parser message.
        message: String,
        /// The sanitized text that failed to parse. Diagnostics only;
        /// never shown verbatim to the end user.
        payload: String,
    },

    /// The decoded value was not a JSON object.
    #[error("Response is not a JSON object")]
    NotAnObject,

    /// The decoded object has no `projects` array.
    #[error("Response has no projects array")]
    ProjectsNotArray,
}

// ============================================================================
// Source Error
// ============================================================================

/// Attempt-level error for a single source.
///
/// The chain converts these into [`FetchError::SourcesExhausted`] once
/// every source has failed; they never escape the chain directly.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The transport itself failed (connection refused, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response status was outside the success range.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
}

// ============================================================================
// Tests
// ============================================================================
