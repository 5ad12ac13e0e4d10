//! Language branding for the presentation layer.
//!
//! The view layer badges each project card with its primary language,
//! colored per GitHub's conventional palette. This is static lookup
//! configuration; the pipeline itself never reads it.

// ============================================================================
// Language Branding
// ============================================================================

/// Color used for languages without a dedicated entry.
const DEFAULT_COLOR: &str = "#8b949e";

/// Visual styling for a project's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageBranding {
    /// Badge background color as a hex string.
    pub color: &'static str,
}

impl LanguageBranding {
    /// Returns the branding for a language name.
    ///
    /// Unknown and empty languages get a neutral gray.
    pub fn for_language(language: &str) -> Self {
        let color = match language {
            "JavaScript" => "#f1e05a",
            "TypeScript" => "#3178c6",
            "Python" => "#3572A5",
            "Go" => "#00ADD8",
            "Java" => "#b07219",
            "Ruby" => "#701516",
            "PHP" => "#4F5D95",
            "C++" => "#f34b7d",
            "C" => "#555555",
            "HTML" => "#e34c26",
            "CSS" => "#1572B6",
            "Shell" => "#89e051",
            _ => DEFAULT_COLOR,
        };
        Self { color }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        assert_eq!(LanguageBranding::for_language("Go").color, "#00ADD8");
        assert_eq!(LanguageBranding::for_language("TypeScript").color, "#3178c6");
        assert_eq!(LanguageBranding::for_language("Shell").color, "#89e051");
    }

    #[test]
    fn test_unknown_language_default() {
        assert_eq!(LanguageBranding::for_language("Brainfuck").color, DEFAULT_COLOR);
        assert_eq!(LanguageBranding::for_language("").color, DEFAULT_COLOR);
    }
}
