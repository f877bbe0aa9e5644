//! Sentence segmentation for raw input text
//!
//! Normalizes whitespace and splits on terminal punctuation followed by
//! whitespace. Purely lexical; no language-specific tokenization.

use regex::Regex;

/// Splits raw text into an ordered sequence of trimmed, non-empty sentences
pub struct SentenceSegmenter {
    whitespace_pattern: Regex,
    boundary_pattern: Regex,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self {
            whitespace_pattern: Regex::new(r"\s+").unwrap(),
            boundary_pattern: Regex::new(r"[.!?]\s+").unwrap(),
        }
    }

    /// Segment text into sentences
    ///
    /// Every maximal whitespace run is collapsed to a single space, then the
    /// text is split at each `.`, `!` or `?` followed by whitespace; the
    /// punctuation mark is consumed by the boundary. A terminal mark with
    /// nothing after it does not split, so a punctuation-terminated final
    /// sentence keeps its mark while internal sentences lose theirs.
    ///
    /// Empty input yields an empty sequence; input without any boundary
    /// yields the whole trimmed text as a single sentence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = self.whitespace_pattern.replace_all(text, " ");

        self.boundary_pattern
            .split(&normalized)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
