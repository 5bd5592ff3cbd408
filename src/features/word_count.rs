use anyhow::Result;

use crate::domain::question::Question;
use crate::domain::traits::FeatureGenerator;

/// Emits `[whitespace-separated word count of the question text]`
#[derive(Debug)]
pub struct WordCount;

impl FeatureGenerator for WordCount {
    fn name(&self) -> &'static str {
        "word_count"
    }

    fn vector(&self, question: &Question) -> Result<Vec<f64>> {
        Ok(vec![question.question.split_whitespace().count() as f64])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words() {
        let v = WordCount.vector(&Question::new("Q1", "What is X?")).unwrap();
        assert_eq!(v, vec![3.0]);
    }

    #[test]
    fn test_empty_text_is_zero() {
        let v = WordCount.vector(&Question::new("Q1", "")).unwrap();
        assert_eq!(v, vec![0.0]);
    }
}
