//! Analysis Module Tests
//!
//! Properties of the heuristic passes and the analyzer orchestrator.

use crate::analysis::keywords::is_stopword;
use crate::analysis::{
    DocumentAnalyzer, DocumentClassifier, DocumentType, EntityDetector, KeywordExtractor,
    ReadabilityScorer,
};
use crate::samples::Sample;

const CORPUS: &[&str] = &[
    "Revenue grew 15% in Q3 2024. Contact sales@corp.com for details.",
    "  leading and trailing   whitespace\n\nwith\ttabs  ",
    "one",
    "Abstract: a study. Introduction follows. References: none.",
    "The quick brown fox jumps over the lazy dog! Did it? Yes.",
    "Ünïcödé wörds, émojis 🎉 and 東京 text.",
];

#[cfg(test)]
mod counting_tests {
    use super::*;

    #[test]
    fn test_word_count_matches_whitespace_tokens() {
        let analyzer = DocumentAnalyzer::new();

        for text in CORPUS {
            let result = analyzer.analyze("corpus.txt", text).unwrap();
            assert_eq!(
                result.word_count,
                text.split_whitespace().count(),
                "word count mismatch for {:?}",
                text
            );
            assert_eq!(result.char_count, text.chars().count());
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = DocumentAnalyzer::new();

        for sample in Sample::ALL {
            let first = analyzer.analyze(&sample.filename(), sample.text()).unwrap();
            let second = analyzer.analyze(&sample.filename(), sample.text()).unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_separate_analyzers_agree() {
        let text = Sample::BusinessReport.text();
        let a = DocumentAnalyzer::new().analyze("a.txt", text).unwrap();
        let b = DocumentAnalyzer::new().analyze("a.txt", text).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_academic_without_business_keywords() {
        let classifier = DocumentClassifier::new();
        let text = "Abstract: we evaluate sorting networks on small inputs. \
                    The results are discussed below. References: Knuth, 1998.";
        assert_eq!(classifier.classify(text), DocumentType::Academic);
    }

    #[test]
    fn test_samples_classification() {
        let classifier = DocumentClassifier::new();
        assert_eq!(
            classifier.classify(Sample::ResearchPaper.text()),
            DocumentType::Academic
        );
        assert_eq!(
            classifier.classify(Sample::BusinessReport.text()),
            DocumentType::Business
        );
        assert_eq!(
            classifier.classify(Sample::TechnicalGuide.text()),
            DocumentType::Technical
        );
    }

    #[test]
    fn test_literary_detection() {
        let classifier = DocumentClassifier::new();
        assert_eq!(
            classifier.classify("Chapter One. It was a dark and stormy night."),
            DocumentType::Literary
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(DocumentType::Business.label(), "Business Document");
        assert_eq!(DocumentType::Other.to_string(), "General Document");
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_keywords_never_stopwords_and_bounded() {
        for k in [1, 3, 8] {
            let extractor = KeywordExtractor::with_config(1, k);
            for sample in Sample::ALL {
                let keywords = extractor.extract_keywords(sample.text(), None);
                assert!(keywords.len() <= k);
                for word in &keywords {
                    assert!(!is_stopword(word), "stop word {:?} returned", word);
                }
            }
            for text in CORPUS {
                let keywords = extractor.extract_keywords(text, None);
                assert!(keywords.len() <= k);
                assert!(keywords.iter().all(|w| !is_stopword(w)));
            }
        }
    }

    #[test]
    fn test_research_paper_topics() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract_keywords(Sample::ResearchPaper.text(), None);
        assert!(keywords.contains(&"healthcare".to_string()));
        assert!(keywords.contains(&"medical".to_string()));
    }
}

#[cfg(test)]
mod entity_tests {
    use super::*;

    #[test]
    fn test_business_sample_entities() {
        let entities = EntityDetector::new().detect(Sample::BusinessReport.text());
        assert_eq!(entities.percentages, vec!["18%", "25%", "89%"]);
        assert!(entities.emails.is_empty());
        assert!(entities.numbers.contains(&"2.4".to_string()));
    }

    #[test]
    fn test_entities_are_unique() {
        let text = "2024 2024 1% 1% x@y.io x@y.io 7 7";
        let entities = EntityDetector::new().detect(text);
        assert_eq!(entities.dates, vec!["2024"]);
        assert_eq!(entities.percentages, vec!["1%"]);
        assert_eq!(entities.emails, vec!["x@y.io"]);
        assert_eq!(entities.numbers, vec!["2024", "7"]);
    }
}

#[cfg(test)]
mod readability_tests {
    use super::*;

    #[test]
    fn test_score_bounds_over_corpus() {
        let scorer = ReadabilityScorer::new();
        for text in CORPUS.iter().copied().chain(Sample::ALL.iter().map(|s| s.text())) {
            let score = scorer.score(text);
            assert!((0.0..=100.0).contains(&score), "{:?} -> {}", text, score);
        }
    }

    #[test]
    fn test_result_carries_metrics() {
        let result = DocumentAnalyzer::new()
            .analyze("guide.txt", Sample::TechnicalGuide.text())
            .unwrap();
        assert_eq!(result.readability_score, result.readability.score);
        assert!(result.readability.sentence_count >= 5);
    }
}
