//! Decoding and schema validation.
//!
//! `decode` turns sanitized text into a generic JSON value, isolating
//! syntax faults. `validate` is strict on the top-level shape (object
//! with a `projects` array) and lenient per field: a sparse or
//! wrong-typed record field coerces to its default rather than failing
//! the whole collection.

use serde_json::Value;
use tracing::debug;

use vitrine_core::{ProjectCollection, ProjectRecord};

use crate::error::FetchError;

// ============================================================================
// Decode
// ============================================================================

/// Parses sanitized text into a JSON value.
///
/// # Errors
///
/// Any syntax error becomes [`FetchError::Decode`], carrying the parser
/// message and the offending text for diagnostics. Nothing unclassified
/// escapes.
pub fn decode(text: &str) -> Result<Value, FetchError> {
    debug!(len = text.len(), "Decoding payload");

    serde_json::from_str(text).map_err(|e| FetchError::Decode {
        message: e.to_string(),
        payload: text.to_string(),
    })
}

// ============================================================================
// Validate
// ============================================================================

/// Checks the decoded value against the feed shape and assembles the
/// typed collection.
///
/// Checks in order, failing fast: the value must be a JSON object, and
/// its `projects` member must be an array. Each array element is then
/// coerced into a [`ProjectRecord`] with per-field defaults; a present
/// string `lastUpdated` is taken verbatim, anything else coerces to the
/// empty string. No partial results.
///
/// # Errors
///
/// Returns [`FetchError::NotAnObject`] or
/// [`FetchError::ProjectsNotArray`] on a top-level shape violation.
pub fn validate(value: &Value) -> Result<ProjectCollection, FetchError> {
    let Some(object) = value.as_object() else {
        return Err(FetchError::NotAnObject);
    };

    let Some(projects) = object.get("projects").and_then(Value::as_array) else {
        return Err(FetchError::ProjectsNotArray);
    };

    let records = projects.iter().map(record_from_value).collect();

    let last_updated = object
        .get("lastUpdated")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    debug!(records = projects.len(), "Payload validated");

    Ok(ProjectCollection {
        projects: records,
        last_updated,
    })
}

/// Coerces one array element into a record, defaulting absent or
/// wrong-typed fields.
fn record_from_value(value: &Value) -> ProjectRecord {
    let str_field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let count_field = |name: &str| value.get(name).and_then(Value::as_u64).unwrap_or_default();

    let topics = value
        .get("topics")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ProjectRecord {
        id: count_field("id"),
        name: str_field("name"),
        full_name: str_field("full_name"),
        description: str_field("description"),
        html_url: str_field("html_url"),
        language: str_field("language"),
        stargazers_count: count_field("stargazers_count"),
        forks_count: count_field("forks_count"),
        created_at: str_field("created_at"),
        updated_at: str_field("updated_at"),
        topics,
    }
}

// ============================================================================
// Tests
// ============================================================================
