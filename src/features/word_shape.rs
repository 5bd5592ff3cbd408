use anyhow::Result;

use crate::domain::question::Question;
use crate::domain::traits::FeatureGenerator;

/// Emits `[mean word length, question-mark flag]`.
///
/// The mean is over whitespace-separated words; an empty text gives
/// 0.0 rather than dividing by zero. The flag is 1.0 when the text
/// ends with '?' after trailing whitespace is ignored.
#[derive(Debug)]
pub struct WordShape;

impl FeatureGenerator for WordShape {
    fn name(&self) -> &'static str {
        "word_shape"
    }

    fn vector(&self, question: &Question) -> Result<Vec<f64>> {
        let words: Vec<&str> = question.question.split_whitespace().collect();

        let mean_len = if words.is_empty() {
            0.0
        } else {
            let total: usize = words.iter().map(|w| w.chars().count()).sum();
            total as f64 / words.len() as f64
        };

        let asks = if question.question.trim_end().ends_with('?') {
            1.0
        } else {
            0.0
        };

        Ok(vec![mean_len, asks])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_word_length_and_flag() {
        // "What" = 4, "is" = 2, "X?" = 2 → mean 8/3
        let v = WordShape.vector(&Question::new("Q1", "What is X?")).unwrap();
        assert!((v[0] - 8.0 / 3.0).abs() < 1e-9);
        assert_eq!(v[1], 1.0);
    }

    #[test]
    fn test_statement_has_no_flag() {
        let v = WordShape.vector(&Question::new("Q1", "X is a thing")).unwrap();
        assert_eq!(v[1], 0.0);
    }

    #[test]
    fn test_empty_text() {
        let v = WordShape.vector(&Question::new("Q1", "")).unwrap();
        assert_eq!(v, vec![0.0, 0.0]);
    }
}
