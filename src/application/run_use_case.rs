// ============================================================
// Layer 2 — RunUseCase
// ============================================================
// Orchestrates one full experiment run in order:
//
//   Step 1: Resolve generator selection  (Layer 5 - features)
//   Step 2: Load or restore the corpus   (Layer 4 - data / 6 - infra)
//   Step 3: Run the feature pipeline     (Layer 5 - features)
//   Step 4: Return the populated corpus
//
// Selection is resolved before any corpus I/O, so a typo in
// --features fails the run before a single file is opened.
//
// The returned corpus is the output boundary: the CLI reports
// samples from it, and a downstream analysis step would consume
// it whole.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{loader::XmlQuestionLoader, preprocessor::Preprocessor};
use crate::domain::question::QuestionMap;
use crate::domain::traits::QuestionSource;
use crate::features::{pipeline::FeaturePipeline, registry::FeatureRegistry};
use crate::infra::corpus_cache::CorpusCache;

// ─── Run Configuration ───────────────────────────────────────────────────────
// Everything one run needs. Serialisable so a run's settings can
// be recorded alongside its outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub data_dir:   String,
    pub cache_file: String,
    pub use_cache:  bool,
    /// Generator names to run, in order. Empty means every
    /// registered generator, in registration order.
    pub features:   Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir:   "data/questions".to_string(),
            cache_file: "cache/questions.json".to_string(),
            use_cache:  false,
            features:   Vec::new(),
        }
    }
}

// ─── RunUseCase ──────────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline end to end.
pub struct RunUseCase {
    config: RunConfig,
}

impl RunUseCase {
    /// Create a new RunUseCase with the given configuration
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Execute the full run and return the corpus with every
    /// feature vector populated
    pub fn execute(&self) -> Result<QuestionMap> {
        let cfg = &self.config;

        // ── Step 1: Resolve the generator selection ──────────────────────────
        // Unknown names fail here, before any corpus I/O
        let registry   = FeatureRegistry::with_builtins();
        let generators = if cfg.features.is_empty() {
            registry.resolve_all()
        } else {
            registry.resolve(&cfg.features)?
        };

        let mut pipeline = FeaturePipeline::new(generators);
        tracing::info!("Selected generators: {}", pipeline.generator_names().join(", "));

        // ── Step 2: Load or restore the corpus ───────────────────────────────
        // --cached skips loading + preprocessing entirely; otherwise
        // the fresh corpus becomes the new cache
        let cache = CorpusCache::new(&cfg.cache_file);
        let mut corpus = if cfg.use_cache {
            tracing::info!("Loading cached question and preprocessor data");
            cache.load()?
        } else {
            tracing::info!("Loading question files from '{}'", cfg.data_dir);
            let loader     = XmlQuestionLoader::new(&cfg.data_dir);
            let mut corpus = loader.load_all()?;

            Preprocessor::new().preprocess(&mut corpus);

            cache.store(&corpus)?;
            corpus
        };

        // ── Step 3: Run the feature pipeline ─────────────────────────────────
        pipeline.run(&mut corpus)?;

        // ── Step 4: Hand the populated corpus onward ─────────────────────────
        Ok(corpus)
    }
}
