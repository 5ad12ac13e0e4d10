//! Text output formatting with colors.

use vitrine_core::{ProjectCollection, ProjectRecord};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the whole feed: one block per record plus the footer.
    pub fn format_collection(&self, collection: &ProjectCollection) -> String {
        if collection.is_empty() {
            return "No projects found.".to_string();
        }

        let mut blocks: Vec<String> = collection
            .projects
            .iter()
            .map(|record| self.format_record(record))
            .collect();

        if collection.has_timestamp() {
            blocks.push(format!(
                "Projects last updated: {}",
                self.dim(&collection.updated_label())
            ));
        }

        blocks.join("\n\n")
    }

    /// Formats a single project record.
    pub fn format_record(&self, record: &ProjectRecord) -> String {
        let mut lines = Vec::new();

        // Header: "my-tool [Go]"
        let mut header = self.bold(&record.name);
        if record.has_language() {
            header.push_str(&format!(" [{}]", self.cyan(&record.language)));
        }
        lines.push(header);

        lines.push(format!("  {}", record.description_or_placeholder()));

        lines.push(format!(
            "  {} {}  {} {}  Updated: {}",
            self.yellow("★"),
            record.stargazers_count,
            "⑂",
            record.forks_count,
            record.updated_label()
        ));

        if !record.html_url.is_empty() {
            lines.push(format!("  {}", self.dim(&record.html_url)));
        }

        lines.join("\n")
    }

    /// Formats a pipeline failure message.
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {message}", self.red("Error loading projects:"))
    }

    // Color helpers

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
