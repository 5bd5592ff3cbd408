// ============================================================
// Layer 5 — Word Rarity Generator
// ============================================================
// Emits `[mean idf, max idf]` for a record's words, where idf is
// the smoothed inverse document frequency of the word across the
// whole corpus:
//
//   idf(w) = ln((1 + documents) / (1 + documents containing w))
//
// "Document" here means one question text — top-level and related
// records both count. The table is precomputed once in init(), so
// every vector() call afterwards is a pure lookup and two records
// with equal text always score identically.
//
// Words are normalised the same way on both sides: lowercased,
// punctuation trimmed from the edges.

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use crate::domain::question::{Question, QuestionMap};
use crate::domain::traits::FeatureGenerator;

#[derive(Debug)]
pub struct RareWords {
    /// Word → idf, built from the corpus in init()
    idf:       HashMap<String, f64>,
    /// Total number of question texts the table was built from
    doc_count: usize,
}

impl RareWords {
    pub fn new() -> Self {
        Self {
            idf:       HashMap::new(),
            doc_count: 0,
        }
    }

    /// idf for a word the table has never seen: treat it as
    /// occurring in zero documents
    fn unseen_idf(&self) -> f64 {
        idf(self.doc_count, 0)
    }
}

impl Default for RareWords {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureGenerator for RareWords {
    fn name(&self) -> &'static str {
        "rare_words"
    }

    fn init(&mut self, corpus: &QuestionMap) -> Result<()> {
        if corpus.is_empty() {
            anyhow::bail!("cannot compute word statistics over an empty corpus");
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut documents = 0usize;

        for question in corpus.values() {
            count_document(&mut document_frequency, &mut documents, &question.question);
            for related in question.related.values() {
                count_document(&mut document_frequency, &mut documents, &related.question);
            }
        }

        self.doc_count = documents;
        self.idf = document_frequency
            .into_iter()
            .map(|(word, in_docs)| (word, idf(documents, in_docs)))
            .collect();

        tracing::debug!(
            "Word rarity table: {} words over {} texts",
            self.idf.len(),
            self.doc_count
        );
        Ok(())
    }

    fn vector(&self, question: &Question) -> Result<Vec<f64>> {
        let unseen = self.unseen_idf();

        let mut sum   = 0.0;
        let mut max   = 0.0f64;
        let mut words = 0usize;

        for word in question.question.split_whitespace() {
            let Some(word) = normalize(word) else { continue };
            let value = self.idf.get(&word).copied().unwrap_or(unseen);
            sum += value;
            max = max.max(value);
            words += 1;
        }

        let mean = if words == 0 { 0.0 } else { sum / words as f64 };
        Ok(vec![mean, max])
    }
}

/// Count each distinct normalised word of one text into the
/// document-frequency table
fn count_document(
    document_frequency: &mut HashMap<String, usize>,
    documents: &mut usize,
    text: &str,
) {
    *documents += 1;
    let distinct: HashSet<String> = text.split_whitespace().filter_map(normalize).collect();
    for word in distinct {
        *document_frequency.entry(word).or_insert(0) += 1;
    }
}

/// Lowercase and strip punctuation from the edges.
/// Returns None when nothing alphanumeric remains.
fn normalize(word: &str) -> Option<String> {
    let word = word.to_lowercase();
    let word = word.trim_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Smoothed inverse document frequency
fn idf(documents: usize, in_docs: usize) -> f64 {
    (((1 + documents) as f64) / ((1 + in_docs) as f64)).ln()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> QuestionMap {
        let mut corpus = QuestionMap::new();
        corpus.insert("Q1".to_string(), Question::new("Q1", "what is rust"));
        corpus.insert("Q2".to_string(), Question::new("Q2", "what is python"));
        corpus.insert("Q3".to_string(), Question::new("Q3", "what is gleam"));
        corpus
    }

    #[test]
    fn test_rare_word_scores_higher_than_common_word() {
        let mut generator = RareWords::new();
        generator.init(&corpus()).unwrap();

        let common = generator.vector(&Question::new("T", "what")).unwrap();
        let rare   = generator.vector(&Question::new("T", "gleam")).unwrap();

        // "what" appears in all three texts, "gleam" in one
        assert!(rare[0] > common[0]);
        assert!(rare[1] > common[1]);
    }

    #[test]
    fn test_equal_text_scores_identically() {
        let mut generator = RareWords::new();
        generator.init(&corpus()).unwrap();

        let a = generator.vector(&Question::new("A", "what is rust")).unwrap();
        let b = generator.vector(&Question::new("B", "what is rust")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalization_matches_table() {
        let mut generator = RareWords::new();
        generator.init(&corpus()).unwrap();

        // Case and edge punctuation don't create unseen words
        let plain  = generator.vector(&Question::new("A", "rust")).unwrap();
        let shouty = generator.vector(&Question::new("B", "RUST?!")).unwrap();
        assert_eq!(plain, shouty);
    }

    #[test]
    fn test_related_texts_count_as_documents() {
        let mut corpus = corpus();
        if let Some(q1) = corpus.get_mut("Q1") {
            q1.related
                .insert("R1".to_string(), Question::new("R1", "what is rust"));
        }

        let mut generator = RareWords::new();
        generator.init(&corpus).unwrap();

        // 4 texts now; "rust" appears in 2 of them
        let expected = (5.0f64 / 3.0).ln();
        let v = generator.vector(&Question::new("T", "rust")).unwrap();
        assert!((v[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_corpus_fails_init() {
        let mut generator = RareWords::new();
        assert!(generator.init(&QuestionMap::new()).is_err());
    }

    #[test]
    fn test_empty_text_gives_zeros() {
        let mut generator = RareWords::new();
        generator.init(&corpus()).unwrap();
        let v = generator.vector(&Question::new("T", "")).unwrap();
        assert_eq!(v, vec![0.0, 0.0]);
    }
}
