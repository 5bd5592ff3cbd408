// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw question text before feature generation.
//
// Question text scraped from forum exports often contains:
//   - Non-breaking spaces (U+00A0) from HTML formatting
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Carriage returns (\r) from Windows line endings
//   - Tab characters and stray control characters
//   - Multiple consecutive spaces
//
// If we don't clean these, length- and word-based features count
// whitespace artefacts as content and skew every vector built on
// top of them.
//
// Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants with plain space
//   2. Fold newlines into spaces (a question is one line of text)
//   3. Remove invisible control characters
//   4. Collapse runs of whitespace and trim the edges
//
// The preprocessor also owns the `extra` map on each record: the
// derived fields it writes there are opaque to feature generation.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::question::{Question, QuestionMap};

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean every question and related-question text in place,
    /// recording a lowercased normalised form in each record's
    /// `extra` map. Runs before the corpus is cached, so cached
    /// corpora are already preprocessed.
    pub fn preprocess(&self, corpus: &mut QuestionMap) {
        for question in corpus.values_mut() {
            self.preprocess_record(question);
            for related in question.related.values_mut() {
                self.preprocess_record(related);
            }
        }
        tracing::info!("Preprocessed {} questions", corpus.len());
    }

    fn preprocess_record(&self, question: &mut Question) {
        question.question = self.clean(&question.question);
        question
            .extra
            .insert("normalized".to_string(), question.question.to_lowercase());
    }

    /// Clean a raw text string. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ───────────────────────────
        // Map problematic Unicode characters to plain spaces.
        // Questions are single lines, so newlines fold into spaces too.
        let mapped: String = text
            .chars()
            .map(|c| match c {
                // Tab → space
                '\t' => ' ',
                // Non-breaking space → regular space
                '\u{00A0}' => ' ',
                // Zero-width space → regular space
                '\u{200B}' => ' ',
                // Byte order mark → space
                '\u{FEFF}' => ' ',
                // Line breaks → space
                '\r' | '\n' => ' ',
                // Any other control character → space
                c if c.is_control() => ' ',
                // All other characters pass through unchanged
                c => c,
            })
            .collect();

        // ── Step 2: Collapse whitespace runs and trim ─────────────────────────
        // split_whitespace() drops empty segments, so joining with a
        // single space collapses any run and trims both edges at once.
        mapped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("what   is   x?"), "what is x?");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  what is x?  "), "what is x?");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("what\x01is x?"), "what is x?");
    }

    #[test]
    fn test_folds_newlines_into_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("what is\r\nx?"), "what is x?");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }

    #[test]
    fn test_preprocess_covers_related_records() {
        let mut corpus = QuestionMap::new();
        let mut q = Question::new("Q1", "  What   is X?  ");
        q.related
            .insert("Q2".to_string(), Question::new("Q2", "What\tis Y?"));
        corpus.insert("Q1".to_string(), q);

        Preprocessor::new().preprocess(&mut corpus);

        let q1 = &corpus["Q1"];
        assert_eq!(q1.question, "What is X?");
        assert_eq!(q1.related["Q2"].question, "What is Y?");
        // Derived fields land in the extra map
        assert_eq!(q1.extra["normalized"], "what is x?");
        assert_eq!(q1.related["Q2"].extra["normalized"], "what is y?");
    }
}
