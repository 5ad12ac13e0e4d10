//! Feed-level container types.

use serde::{Deserialize, Serialize};

use super::project::{date_label, ProjectRecord};

// ============================================================================
// Project Collection
// ============================================================================

/// The full project feed: an ordered set of records plus a timestamp.
///
/// Serializes to exactly the wire shape the sources produce
/// (`{"projects": [...], "lastUpdated": "..."}`). Record order is
/// preserved as received; the collection may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCollection {
    /// The records, in feed order.
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    /// When the feed was last regenerated. Empty if the source omitted it.
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
}

impl ProjectCollection {
    /// Creates an empty collection with no timestamp.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            last_updated: String::new(),
        }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns true if the source supplied a feed timestamp.
    pub fn has_timestamp(&self) -> bool {
        !self.last_updated.is_empty()
    }

    /// Formats the feed timestamp as a human date label.
    pub fn updated_label(&self) -> String {
        date_label(&self.last_updated)
    }
}

impl Default for ProjectCollection {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
