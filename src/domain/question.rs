// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// Represents one corpus question, possibly linked to a set of
// related questions with a relevance label.
//
// Only one level of relatedness is processed: a related record
// carries its own `related` map, but nothing ever descends
// past the first level.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full corpus processed in one run, keyed by question id.
///
/// An ordered map, so iteration order — and therefore log output
/// and report output — is identical across runs on the same data.
pub type QuestionMap = BTreeMap<String, Question>;

/// A single question record, top-level or nested under another
/// question's `related` map (the shapes are identical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique key within the corpus, stable across runs
    pub id: String,

    /// The primary text content of the question
    pub question: String,

    /// Relevance label carried by related-question linkage.
    /// Set by the loader, never read or written afterwards.
    #[serde(default)]
    pub relevance: Option<String>,

    /// Related-question records, keyed by their id
    #[serde(default)]
    pub related: BTreeMap<String, Question>,

    /// Ordered concatenation of every generator's output for this
    /// record, in generator-execution order. Starts empty, grows
    /// monotonically, never reordered.
    #[serde(default)]
    pub feature_vector: Vec<f64>,

    /// Preprocessor-owned derived fields. Opaque to feature
    /// generation — nothing outside the preprocessor interprets it.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Question {
    /// Create a new Question with empty linkage and an empty vector.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id:             id.into(),
            question:       question.into(),
            relevance:      None,
            related:        BTreeMap::new(),
            feature_vector: Vec::new(),
            extra:          BTreeMap::new(),
        }
    }
}
