// ============================================================
// Layer 5 — Feature Pipeline
// ============================================================
// Runs every selected generator, in order, and accumulates each
// generator's per-record output into that record's vector:
//
//   for each generator G, in selection order:
//     G.init(corpus)                      — once, whole corpus
//     for each question q:
//       q.feature_vector      += G.vector(q)
//       for each related r under q:
//         r.feature_vector    += G.vector(r)
//
// After N generators, every vector is the ordered concatenation
// of each generator's contribution, in the exact order the
// generators ran. Related records one level deep get the same
// treatment; deeper linkage is never descended into.
//
// A generator's output is staged against the immutable corpus and
// committed only once its whole pass has succeeded. A generator
// that fails at init or at any vector call therefore leaves every
// record's vector exactly as the previous generator left it — the
// corpus never carries a partial contribution.

use crate::domain::errors::FeatureError;
use crate::domain::question::QuestionMap;
use crate::domain::traits::FeatureGenerator;

/// One generator's staged output for a single pass: the owning
/// question id, the related id when the record is nested, and the
/// chunk to append. The Vec keeps the slots ordered, so a future
/// parallel implementation could fill them out of order and still
/// commit deterministically.
type StagedPass = Vec<(String, Option<String>, Vec<f64>)>;

/// Owns the ordered generator instances for one run and borrows
/// the corpus exclusively while it runs them.
pub struct FeaturePipeline {
    generators: Vec<Box<dyn FeatureGenerator>>,
}

impl FeaturePipeline {
    /// Create a pipeline over an ordered generator selection
    pub fn new(generators: Vec<Box<dyn FeatureGenerator>>) -> Self {
        Self { generators }
    }

    /// Names of the generators this pipeline will run, in order
    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Run every generator over the corpus, appending each one's
    /// output to every question's and related question's vector.
    ///
    /// The first failure aborts the run; nothing is caught and
    /// continued, and no generator is skipped or retried.
    pub fn run(&mut self, corpus: &mut QuestionMap) -> Result<(), FeatureError> {
        for generator in self.generators.iter_mut() {
            tracing::info!("Running feature generator '{}'", generator.name());

            // init sees the corpus exactly as the previous generator
            // committed it, never a half-appended state
            generator
                .init(corpus)
                .map_err(|source| FeatureError::Init {
                    generator: generator.name(),
                    source,
                })?;

            let staged = stage_pass(generator.as_ref(), corpus)?;
            commit_pass(corpus, staged);
        }

        Ok(())
    }
}

/// Compute one generator's contribution for every question and
/// every related record, exactly once each, without touching the
/// corpus.
fn stage_pass(
    generator: &dyn FeatureGenerator,
    corpus: &QuestionMap,
) -> Result<StagedPass, FeatureError> {
    let mut staged = Vec::new();

    for (id, question) in corpus {
        let chunk = generator
            .vector(question)
            .map_err(|source| FeatureError::Vector {
                generator:   generator.name(),
                question_id: id.clone(),
                source,
            })?;
        staged.push((id.clone(), None, chunk));

        for (related_id, related) in &question.related {
            let chunk = generator
                .vector(related)
                .map_err(|source| FeatureError::Vector {
                    generator:   generator.name(),
                    question_id: related_id.clone(),
                    source,
                })?;
            staged.push((id.clone(), Some(related_id.clone()), chunk));
        }
    }

    Ok(staged)
}

/// Append every staged chunk to its owning record's vector.
/// Infallible: the ids were read off the same map moments ago and
/// generators cannot add or remove questions.
fn commit_pass(corpus: &mut QuestionMap, staged: StagedPass) {
    for (id, related_id, chunk) in staged {
        let Some(question) = corpus.get_mut(&id) else { continue };
        match related_id {
            None => question.feature_vector.extend(chunk),
            Some(related_id) => {
                if let Some(related) = question.related.get_mut(&related_id) {
                    related.feature_vector.extend(chunk);
                }
            }
        }
    }
}
