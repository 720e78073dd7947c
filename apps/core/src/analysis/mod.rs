//! # Analysis Module
//!
//! Heuristic, model-free analysis of extracted document text.
//!
//! ## Components
//! - `classifier`: Document type from ordered keyword-trigger rules
//! - `keywords`: Frequency-ranked key topics with stop-word filtering
//! - `readability`: Flesch reading ease
//! - `entities`: Dates, percentages, emails and numbers
//! - `summary`: Lead-sentence summary
//! - `result`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod entities;
pub mod keywords;
pub mod readability;
pub mod result;
pub mod summary;

pub use analyzer::DocumentAnalyzer;
pub use classifier::{Classification, ClassificationRule, DocumentClassifier, DocumentType};
pub use entities::{Entities, EntityDetector, EntityKind};
pub use keywords::{KeywordExtractor, KeywordResult};
pub use readability::{ReadabilityMetrics, ReadabilityScorer};
pub use result::AnalysisResult;
pub use summary::Summarizer;
