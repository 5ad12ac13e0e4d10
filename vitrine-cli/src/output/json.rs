//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
///
/// Serializing a `ProjectCollection` through this yields exactly the wire
/// shape the sources serve, so `vitrine fetch --format json` output can
/// itself be served as the fallback file.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a pipeline failure as a one-field object.
    pub fn format_error(&self, message: &str) -> Result<String> {
        self.format(&serde_json::json!({ "error": message }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::ProjectCollection;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_collection_serializes_to_wire_shape() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format(&ProjectCollection::new()).unwrap();
        assert_eq!(output, r#"{"projects":[],"lastUpdated":""}"#);
    }

    #[test]
    fn test_format_error() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_error("Empty response received").unwrap();
        assert_eq!(output, r#"{"error":"Empty response received"}"#);
    }
}
