use anyhow::Result;

use crate::domain::question::Question;
use crate::domain::traits::FeatureGenerator;

/// Emits `[character count of the question text]`.
/// Counts chars, not bytes, so multi-byte text isn't inflated.
#[derive(Debug)]
pub struct QuestionLength;

impl FeatureGenerator for QuestionLength {
    fn name(&self) -> &'static str {
        "question_length"
    }

    fn vector(&self, question: &Question) -> Result<Vec<f64>> {
        Ok(vec![question.question.chars().count() as f64])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters() {
        let v = QuestionLength.vector(&Question::new("Q1", "What is X?")).unwrap();
        assert_eq!(v, vec![10.0]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let v = QuestionLength.vector(&Question::new("Q1", "héllo")).unwrap();
        assert_eq!(v, vec![5.0]);
    }

    #[test]
    fn test_empty_text_is_zero() {
        let v = QuestionLength.vector(&Question::new("Q1", "")).unwrap();
        assert_eq!(v, vec![0.0]);
    }
}
