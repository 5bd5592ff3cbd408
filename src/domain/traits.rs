// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - XmlQuestionLoader implements QuestionSource
//   - A future CsvLoader could also implement QuestionSource
//   - The application layer only sees QuestionSource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::question::{Question, QuestionMap};

// ─── QuestionSource ───────────────────────────────────────────────────────────
/// Any component that can produce a question corpus.
///
/// Implementations:
///   - XmlQuestionLoader → loads from a directory of .xml files
pub trait QuestionSource {
    /// Load every available question from this source.
    /// Returns the corpus mapping or an error.
    fn load_all(&self) -> Result<QuestionMap>;
}

// ─── FeatureGenerator ─────────────────────────────────────────────────────────
/// A pluggable component producing a fixed-shape numeric vector
/// per question record.
///
/// Lifecycle per run: `init` is called exactly once, observing the
/// whole corpus before any generator has appended anything; `vector`
/// is then called once per question and once per related question.
pub trait FeatureGenerator: std::fmt::Debug {
    /// Registry name — used for selection, logging, and error context
    fn name(&self) -> &'static str;

    /// One-time corpus-wide precomputation into generator-local state.
    /// The corpus is read-only here; generators never write to it.
    fn init(&mut self, _corpus: &QuestionMap) -> Result<()> {
        Ok(())
    }

    /// Produce this generator's contribution for one record.
    /// Must be deterministic: structurally equal records give equal
    /// output, and the output length is fixed for a given generator.
    fn vector(&self, question: &Question) -> Result<Vec<f64>>;
}
