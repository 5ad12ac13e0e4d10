//! Repository record types.
//!
//! [`ProjectRecord`] mirrors the feed's JSON shape for a single project.
//! Every field carries a serde default so a sparse element still
//! deserializes; absent strings become empty, absent counts become zero.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Project Record
// ============================================================================

/// One project's repository metadata, as served by the feed.
///
/// Field names are the wire names. Records are immutable once constructed
/// from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Repository ID, unique within a response.
    #[serde(default)]
    pub id: u64,
    /// Short repository name.
    #[serde(default)]
    pub name: String,
    /// Owner-qualified name ("user/repo").
    #[serde(default)]
    pub full_name: String,
    /// Repository description. Empty if the upstream had none.
    #[serde(default)]
    pub description: String,
    /// Link to the repository page.
    #[serde(default)]
    pub html_url: String,
    /// Primary language. Possibly empty.
    #[serde(default)]
    pub language: String,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u64,
    /// Creation timestamp (ISO-8601, kept as a string).
    #[serde(default)]
    pub created_at: String,
    /// Last-update timestamp (ISO-8601, kept as a string).
    #[serde(default)]
    pub updated_at: String,
    /// Repository topics, in feed order.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl ProjectRecord {
    /// Returns the description, or a placeholder when it is empty.
    pub fn description_or_placeholder(&self) -> &str {
        if self.description.is_empty() {
            "No description available"
        } else {
            &self.description
        }
    }

    /// Returns true if the record names a primary language.
    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }

    /// Formats the update timestamp as a human date label.
    pub fn updated_label(&self) -> String {
        date_label(&self.updated_at)
    }
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            full_name: String::new(),
            description: String::new(),
            html_url: String::new(),
            language: String::new(),
            stargazers_count: 0,
            forks_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
            topics: Vec::new(),
        }
    }
}

// ============================================================================
// Date Labels
// ============================================================================

/// Formats an ISO-8601 timestamp as "January 1, 2024".
///
/// Accepts full RFC 3339 timestamps and bare dates (the feed's
/// `lastUpdated` is sometimes a plain `YYYY-MM-DD`). Anything else is
/// returned verbatim so a bad timestamp never hides the record.
pub fn date_label(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_placeholder() {
        let record = ProjectRecord::default();
        assert_eq!(record.description_or_placeholder(), "No description available");

        let record = ProjectRecord {
            description: "A tax tool".to_string(),
            ..ProjectRecord::default()
        };
        assert_eq!(record.description_or_placeholder(), "A tax tool");
    }

    #[test]
    fn test_has_language() {
        let mut record = ProjectRecord::default();
        assert!(!record.has_language());

        record.language = "Go".to_string();
        assert!(record.has_language());
    }

    #[test]
    fn test_date_label_rfc3339() {
        assert_eq!(date_label("2024-06-01T00:00:00Z"), "June 1, 2024");
        assert_eq!(date_label("2024-12-25T13:45:00+02:00"), "December 25, 2024");
    }

    #[test]
    fn test_date_label_bare_date() {
        assert_eq!(date_label("2025-01-01"), "January 1, 2025");
    }

    #[test]
    fn test_date_label_unparseable_passthrough() {
        assert_eq!(date_label("yesterday"), "yesterday");
        assert_eq!(date_label(""), "");
    }
}
