//! # Document Analyzer
//!
//! Reads a PDF, DOCX, text or code file, runs a set of independent heuristic passes
//! over its text (counts, readability, document type, key topics, entities, summary)
//! and renders or exports the result.
//!
//! Flow: [`text_extract`] → [`analysis`] → [`display`] / [`export`], tied together by
//! [`pipeline::DocumentPipeline`].

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod preflight;
pub mod samples;
pub mod text_extract;

pub use analysis::{AnalysisResult, DocumentAnalyzer, DocumentType};
pub use config::AnalyzerConfig;
pub use error::AppError;
pub use models::{Document, DocumentFormat};
pub use pipeline::DocumentPipeline;

#[cfg(test)]
mod tests;
