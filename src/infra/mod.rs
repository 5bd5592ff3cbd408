// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any specific
// business layer:
//
//   corpus_cache.rs — Persists the loaded + preprocessed corpus
//                     as JSON so repeated experiments skip the
//                     load + preprocess cost. Freshness is the
//                     operator's call via the --cached flag.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Corpus persistence for cheap re-runs
pub mod corpus_cache;
