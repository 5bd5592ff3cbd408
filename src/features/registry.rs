// ============================================================
// Layer 5 — Feature Generator Registry
// ============================================================
// Maps generator names to constructors. The registry is
// populated by an explicit registration step at construction —
// there is no runtime lookup into global namespaces, so the set
// of generators a binary ships is visible in one place.
//
// Registration order is the default execution order when the
// user doesn't pass an explicit selection.

use crate::domain::errors::FeatureError;
use crate::domain::traits::FeatureGenerator;
use crate::features::{
    question_length::QuestionLength,
    rare_words::RareWords,
    word_count::WordCount,
    word_shape::WordShape,
};

/// Builds one fresh generator instance per run
type GeneratorFactory = fn() -> Box<dyn FeatureGenerator>;

/// An ordered name → factory mapping of every available generator
pub struct FeatureRegistry {
    factories: Vec<(&'static str, GeneratorFactory)>,
}

impl FeatureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { factories: Vec::new() }
    }

    /// Create a registry holding every built-in generator.
    /// The order here is the default run order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("question_length", || Box::new(QuestionLength));
        registry.register("word_count",      || Box::new(WordCount));
        registry.register("word_shape",      || Box::new(WordShape));
        registry.register("rare_words",      || Box::new(RareWords::new()));
        registry
    }

    /// Register one generator under a name
    pub fn register(&mut self, name: &'static str, factory: GeneratorFactory) {
        self.factories.push((name, factory));
    }

    /// Names of every registered generator, in registration order
    pub fn available(&self) -> Vec<&'static str> {
        self.factories.iter().map(|(name, _)| *name).collect()
    }

    /// Resolve each requested name to one fresh generator instance,
    /// preserving request order.
    ///
    /// All names are validated before any instance is built, so an
    /// unknown name fails the run before anything else happens.
    pub fn resolve(
        &self,
        names: &[String],
    ) -> Result<Vec<Box<dyn FeatureGenerator>>, FeatureError> {
        let mut picked: Vec<GeneratorFactory> = Vec::with_capacity(names.len());

        for name in names {
            let factory = self
                .factories
                .iter()
                .find(|(n, _)| *n == name.as_str())
                .map(|(_, factory)| *factory)
                .ok_or_else(|| FeatureError::UnknownGenerator {
                    name:      name.clone(),
                    available: self.available().join(", "),
                })?;
            picked.push(factory);
        }

        Ok(picked.into_iter().map(|factory| factory()).collect())
    }

    /// Every registered generator, in registration order —
    /// the default when no explicit selection is given
    pub fn resolve_all(&self) -> Vec<Box<dyn FeatureGenerator>> {
        self.factories.iter().map(|(_, factory)| factory()).collect()
    }
}

/// Implement Default as the empty registry; callers wanting the
/// shipped generators use with_builtins()
impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
