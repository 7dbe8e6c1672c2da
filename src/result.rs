//! Result types for extraction output.

/// Result of extracting one page.
///
/// `content_html` is `None` when no candidate element existed at all; a
/// too-short result is still returned (with a warning) after the final
/// relaxed attempt so callers can decide what to do with it.
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    /// Cleaned article body as an HTML fragment.
    pub content_html: Option<String>,

    /// Plain text of the extracted body.
    pub content_text: String,

    /// Number of whitespace-separated words in `content_text`.
    pub word_count: usize,

    /// Detected URL of the next article page, when one validated.
    pub next_page_url: Option<String>,

    /// Non-fatal issues encountered during extraction.
    pub warnings: Vec<String>,
}

impl ExtractedContent {
    /// Whether the extracted text meets the given length threshold.
    #[must_use]
    pub fn is_sufficient(&self, min_length: usize) -> bool {
        self.content_text.trim().chars().count() >= min_length
    }
}

/// Result of a full parse, with pagination merged in.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Concatenated article body across all rendered pages.
    pub content_html: Option<String>,

    /// Plain text of the concatenated body.
    pub content_text: String,

    /// Word count recomputed over the concatenated text.
    pub word_count: usize,

    /// Pages visited, first page included.
    pub total_pages: usize,

    /// Pages whose content made it into the output.
    pub rendered_pages: usize,

    /// Non-fatal issues from extraction and pagination.
    pub warnings: Vec<String>,
}

/// Count whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(count_words("one two\tthree\nfour"), 4);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn sufficiency_trims_before_counting() {
        let content = ExtractedContent {
            content_text: format!("  {}  ", "a".repeat(10)),
            ..ExtractedContent::default()
        };
        assert!(content.is_sufficient(10));
        assert!(!content.is_sufficient(11));
    }
}
