//! Document Analyzer - Main orchestrator for the analysis module.
//!
//! Runs counting, readability, classification, keyword extraction, entity
//! detection and summarization over the same extracted text. The passes are
//! independent and read-only.

use std::time::Instant;
use tracing::{debug, info};

use super::classifier::DocumentClassifier;
use super::entities::EntityDetector;
use super::keywords::KeywordExtractor;
use super::readability::ReadabilityScorer;
use super::result::AnalysisResult;
use super::summary::Summarizer;
use crate::config::AnalyzerConfig;
use crate::error::AppError;

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    classifier: DocumentClassifier,
    keyword_extractor: KeywordExtractor,
    readability_scorer: ReadabilityScorer,
    entity_detector: EntityDetector,
    summarizer: Summarizer,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            classifier: DocumentClassifier::new(),
            keyword_extractor: KeywordExtractor::with_config(
                config.min_keyword_length,
                config.top_keywords,
            ),
            readability_scorer: ReadabilityScorer::new(),
            entity_detector: EntityDetector::new(),
            summarizer: Summarizer::new(config.summary_sentences, config.summary_max_chars),
        }
    }

    /// Analyze extracted text. Blank text is rejected with `EmptyInput`.
    pub fn analyze(&self, filename: &str, text: &str) -> Result<AnalysisResult, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let start = Instant::now();

        let classification = self.classifier.classify_detailed(text);
        let readability = self.readability_scorer.analyze(text);

        let result = AnalysisResult {
            filename: filename.to_string(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            document_type: classification.document_type,
            readability_score: readability.score,
            readability,
            summary: self.summarizer.summarize(text),
            key_topics: self.keyword_extractor.extract_keywords(text, None),
            entities: self.entity_detector.detect(text),
        };

        info!(
            "Analyzed {}: {} words, type {} (trigger: {})",
            filename,
            result.word_count,
            result.document_type,
            classification.matched_trigger.as_deref().unwrap_or("none")
        );
        debug!("Analysis took {:?}", start.elapsed());

        Ok(result)
    }
}
