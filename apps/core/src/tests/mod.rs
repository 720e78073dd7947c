//! Test Module
//!
//! Cross-module test suite for the document analyzer.
//!
//! ## Test Categories
//! - `analysis_tests`: Counting, classification, keywords, entities, readability, determinism
//! - `text_extract_tests`: Plain text, PDF and DOCX extraction
//! - `pipeline_tests`: Size limits, error mapping, end-to-end scenarios
//! - `export_tests`: JSON and text reports, files on disk
//! - `interactive_tests`: Scripted interactive sessions
//! - `config_tests`: Environment-driven configuration

pub mod analysis_tests;
pub mod export_tests;
