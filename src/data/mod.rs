// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw .xml question files
// to a preprocessed, feature-ready corpus.
//
// The pipeline flows in this order:
//
//   .xml files
//       │
//       ▼
//   XmlQuestionLoader → reads files, builds Question records
//       │
//       ▼
//   Preprocessor      → cleans question text in place
//       │
//       ▼
//   CorpusCache       → persists the result for cheap re-runs
//                       (Layer 6 — infra)
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads question .xml files from a directory using quick-xml
pub mod loader;

/// Cleans and normalises question text across the corpus
pub mod preprocessor;
