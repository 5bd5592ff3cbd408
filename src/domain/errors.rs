// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Every pipeline failure is unrecoverable by design: one bad
// generator halts the whole run, because downstream analysis
// needs every question to carry a complete, equal-shape vector
// for the generators run this pass.

use thiserror::Error;

/// Errors that can occur while selecting or running feature generators.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A requested generator name does not resolve in the registry.
    /// Raised before any generator instance is built and before any
    /// corpus record is touched.
    #[error("unknown feature generator '{name}' (available: {available})")]
    UnknownGenerator { name: String, available: String },

    /// A generator's one-time corpus precomputation failed
    #[error("feature generator '{generator}' failed to initialize")]
    Init {
        generator: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A generator failed to produce a vector for one record
    #[error("feature generator '{generator}' failed on question '{question_id}'")]
    Vector {
        generator: &'static str,
        question_id: String,
        #[source]
        source: anyhow::Error,
    },
}
