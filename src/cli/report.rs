// ============================================================
// Layer 1 — Sample Reporting
// ============================================================
// Prints a sample of the corpus and its feature vectors for
// manual inspection after a run. Long values are elided so one
// pathological question doesn't flood the terminal.

use crate::domain::question::QuestionMap;

/// Truncate a string to `width` characters, marking the cut
/// with a trailing ellipsis
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let truncated: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{truncated}...")
}

/// Print one sample question's non-core fields: id, text, and
/// whatever the preprocessor left in the extra map
pub fn print_sample_structure(corpus: &QuestionMap, width: usize) {
    let Some(sample) = corpus.values().next() else {
        println!("\nCorpus is empty — nothing to report");
        return;
    };

    println!("\nSample question structure:");
    println!("  id = {}", ellipsize(&sample.id, width));
    println!("  question = {}", ellipsize(&sample.question, width));
    for (key, value) in &sample.extra {
        println!("  {key} = {}", ellipsize(value, width));
    }
}

/// Print the first question's text and vector, then each of its
/// related records' text and vector
pub fn print_sample_vectors(corpus: &QuestionMap, width: usize) {
    let Some(first) = corpus.values().next() else {
        return;
    };

    println!("\nSample questions and feature vectors:");
    println!("\nOriginal Question: {}", ellipsize(&first.question, width));
    println!("Feature Vector: {:?}", first.feature_vector);

    for related in first.related.values() {
        println!("\nRelated Question: {}", ellipsize(&related.question, width));
        println!("Feature Vector: {:?}", related.feature_vector);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(ellipsize("short", 80), "short");
    }

    #[test]
    fn test_long_strings_are_elided() {
        let long = "x".repeat(100);
        let out  = ellipsize(&long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_exact_width_is_not_elided() {
        let s = "y".repeat(12);
        assert_eq!(ellipsize(&s, 12), s);
    }
}
