// ============================================================
// Layer 6 — Corpus Cache
// ============================================================
// Saves and restores the loaded + preprocessed corpus as JSON.
//
// Loading and preprocessing the question files is the expensive
// part of a run; the feature pipeline itself is cheap. Caching
// the corpus means an experiment loop of "tweak a generator,
// re-run" pays the I/O cost once.
//
// The cache stores the corpus as written — preprocessing included,
// feature vectors in whatever state they were stored in (the run
// use case stores them empty, before generation).

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::question::QuestionMap;

/// Persists one corpus at a fixed path
pub struct CorpusCache {
    /// Full path of the JSON cache file
    path: PathBuf,
}

impl CorpusCache {
    /// Create a CorpusCache over a file path.
    /// Nothing is touched on disk until store() or load() runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the corpus as pretty-printed JSON, creating parent
    /// directories as needed
    pub fn store(&self, corpus: &QuestionMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).ok();
        }

        let json = serde_json::to_string_pretty(corpus)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write corpus cache to '{}'", self.path.display()))?;

        tracing::debug!("Stored {} questions in '{}'", corpus.len(), self.path.display());
        Ok(())
    }

    /// Read a previously stored corpus back from disk
    pub fn load(&self) -> Result<QuestionMap> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read corpus cache '{}'. \
                 Run once without --cached to build it.",
                self.path.display()
            )
        })?;

        let corpus: QuestionMap = serde_json::from_str(&json)
            .with_context(|| format!("Corpus cache '{}' is not valid JSON", self.path.display()))?;

        tracing::info!("Loaded {} questions from cache", corpus.len());
        Ok(corpus)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::Question;

    fn sample_corpus() -> QuestionMap {
        let mut corpus = QuestionMap::new();
        let mut q = Question::new("Q1", "What is X?");
        q.feature_vector = vec![10.0, 3.0];
        q.extra.insert("normalized".to_string(), "what is x?".to_string());
        let mut related = Question::new("Q2", "What is Y?");
        related.relevance = Some("Relevant".to_string());
        q.related.insert("Q2".to_string(), related);
        corpus.insert("Q1".to_string(), q);
        corpus
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let dir   = tempfile::tempdir().unwrap();
        let cache = CorpusCache::new(dir.path().join("questions.json"));

        let corpus = sample_corpus();
        cache.store(&corpus).unwrap();
        let restored = cache.load().unwrap();

        assert_eq!(restored, corpus);
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/questions.json");

        CorpusCache::new(&path).store(&sample_corpus()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_cache_mentions_cached_flag() {
        let dir   = tempfile::tempdir().unwrap();
        let cache = CorpusCache::new(dir.path().join("absent.json"));

        let err = cache.load().unwrap_err();
        assert!(format!("{err:#}").contains("--cached"));
    }

    #[test]
    fn test_corrupt_cache_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(CorpusCache::new(path).load().is_err());
    }
}
