//! Readability scoring.
//!
//! Flesch reading ease over average sentence length and average syllables per word,
//! clamped to `[0, 100]`. Higher means easier to read.

use serde::{Deserialize, Serialize};

use super::summary::split_sentences;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Statistics behind a readability score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Words containing at least one letter
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
    /// Flesch reading ease, rounded to one decimal
    pub score: f64,
}

impl ReadabilityMetrics {
    fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            syllable_count: 0,
            avg_sentence_length: 0.0,
            avg_syllables_per_word: 0.0,
            score: MIN_SCORE,
        }
    }
}

/// Readability scorer for text analysis
#[derive(Debug, Clone, Default)]
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> ReadabilityMetrics {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.chars()
                    .filter(|c| c.is_alphabetic())
                    .flat_map(|c| c.to_lowercase())
                    .collect::<String>()
            })
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return ReadabilityMetrics::empty();
        }

        let word_count = words.len();
        let sentence_count = split_sentences(text).len().max(1);
        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

        let avg_sentence_length = word_count as f64 / sentence_count as f64;
        let avg_syllables_per_word = syllable_count as f64 / word_count as f64;

        let raw = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
        let score = (raw.clamp(MIN_SCORE, MAX_SCORE) * 10.0).round() / 10.0;

        ReadabilityMetrics {
            word_count,
            sentence_count,
            syllable_count,
            avg_sentence_length,
            avg_syllables_per_word,
            score,
        }
    }

    /// Get just the readability score
    pub fn score(&self, text: &str) -> f64 {
        self.analyze(text).score
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Approximate syllables by counting vowel groups, with a silent trailing "e".
/// Every word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut previous_vowel = false;

    for c in lower.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if count > 1 && lower.ends_with('e') && !lower.ends_with("le") && !lower.ends_with("ee") {
        count -= 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("free"), 1);
    }

    #[test]
    fn test_simple_text_is_easy() {
        let scorer = ReadabilityScorer::new();
        let metrics = scorer.analyze("The cat sat on the mat. The dog ran.");
        assert_eq!(metrics.sentence_count, 2);
        assert_eq!(metrics.word_count, 9);
        assert!(metrics.score > 90.0);
    }

    #[test]
    fn test_complex_text_is_harder() {
        let scorer = ReadabilityScorer::new();
        let simple = scorer.score("The cat sat on the mat. The dog ran.");
        let complex = scorer.score(
            "Institutional considerations regarding heterogeneous organizational \
             infrastructure necessitate comprehensive interdisciplinary evaluation.",
        );
        assert!(complex < simple);
    }

    #[test]
    fn test_score_is_bounded() {
        let scorer = ReadabilityScorer::new();
        let samples = [
            "a",
            "Go.",
            "Incomprehensibilities characteristically institutionalization \
             counterrevolutionaries electroencephalography",
            "1234 5678",
        ];
        for text in samples {
            let score = scorer.score(text);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{} -> {}", text, score);
        }
    }

    #[test]
    fn test_empty_text() {
        let scorer = ReadabilityScorer::new();
        let metrics = scorer.analyze("");
        assert_eq!(metrics.score, 0.0);
        assert_eq!(metrics.word_count, 0);
    }
}
