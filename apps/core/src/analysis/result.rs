//! Analysis Result - Output structure for document analysis.

use serde::{Deserialize, Serialize};

use super::classifier::DocumentType;
use super::entities::Entities;
use super::readability::ReadabilityMetrics;

/// Everything the analyzer derives from one document's text.
///
/// Built once per document and never mutated; identical text and configuration
/// always produce an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Name of the analyzed document
    pub filename: String,

    /// Whitespace-delimited tokens
    pub word_count: usize,

    /// Unicode scalar values
    pub char_count: usize,

    pub document_type: DocumentType,

    /// Flesch reading ease in `[0, 100]`
    pub readability_score: f64,

    /// Statistics behind the readability score
    pub readability: ReadabilityMetrics,

    /// Leading sentences of the document
    pub summary: String,

    /// Most frequent content words, most frequent first
    pub key_topics: Vec<String>,

    pub entities: Entities,
}

impl AnalysisResult {
    /// Key topics shown in compact views
    pub fn top_topics(&self, limit: usize) -> &[String] {
        &self.key_topics[..self.key_topics.len().min(limit)]
    }
}
