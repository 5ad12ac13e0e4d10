//! Payload sanitization.
//!
//! Static hosting occasionally appends diagnostic text after the JSON
//! body (a `HTTP Status: ...` trailer). The sanitizer recovers the
//! embedded object rather than rejecting the whole response.

use tracing::debug;

use crate::error::FetchError;

/// Marker the static host appends after the JSON object.
const TRAILER_MARKER: &str = "HTTP Status:";

/// Trims and repairs a raw response body.
///
/// Steps, in order: trim surrounding whitespace; if the text contains the
/// trailer marker, truncate at the last `}` before it (when no `}`
/// precedes the marker the text is left as-is for the decoder to
/// classify); reject an empty result. Idempotent on any input it accepts.
///
/// # Errors
///
/// Returns [`FetchError::EmptyPayload`] if the result has zero length.
pub fn sanitize(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();

    let repaired = match trimmed.find(TRAILER_MARKER) {
        Some(marker) => match trimmed[..marker].rfind('}') {
            Some(end) => {
                debug!(
                    dropped = trimmed.len() - (end + 1),
                    "Stripping diagnostic trailer"
                );
                trimmed[..=end].trim()
            }
            None => trimmed,
        },
        None => trimmed,
    };

    if repaired.is_empty() {
        return Err(FetchError::EmptyPayload);
    }

    Ok(repaired.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes_through() {
        assert_eq!(sanitize("{\"projects\":[]}").unwrap(), "{\"projects\":[]}");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  {\"projects\":[]}\n").unwrap(), "{\"projects\":[]}");
    }

    #[test]
    fn test_trailer_recovery() {
        let raw = "{\"projects\":[]} HTTP Status: 200";
        assert_eq!(sanitize(raw).unwrap(), "{\"projects\":[]}");
    }

    #[test]
    fn test_trailer_with_nested_braces() {
        let raw = "{\"projects\":[{\"id\":1}]}\nHTTP Status: 200 OK";
        assert_eq!(sanitize(raw).unwrap(), "{\"projects\":[{\"id\":1}]}");
    }

    #[test]
    fn test_marker_without_preceding_brace_left_for_decoder() {
        // Truncation is impossible; the decoder classifies this later.
        let raw = "HTTP Status: 502";
        assert_eq!(sanitize(raw).unwrap(), "HTTP Status: 502");
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(sanitize(""), Err(FetchError::EmptyPayload)));
        assert!(matches!(sanitize("   \n\t "), Err(FetchError::EmptyPayload)));
    }

    #[test]
    fn test_idempotent_on_accepted_input() {
        for raw in [
            "{\"projects\":[]}",
            "  {\"a\":1}  ",
            "{\"projects\":[]} HTTP Status: 200",
            "plain text",
        ] {
            let once = sanitize(raw).unwrap();
            let twice = sanitize(&once).unwrap();
            assert_eq!(once, twice, "sanitize not idempotent for {raw:?}");
        }
    }
}
