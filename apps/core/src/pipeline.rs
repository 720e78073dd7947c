//! Request boundary: size check, extraction, then analysis.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::analysis::{AnalysisResult, DocumentAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::AppError;
use crate::models::Document;
use crate::text_extract::TextExtractor;

pub struct DocumentPipeline {
    config: AnalyzerConfig,
    extractor: TextExtractor,
    analyzer: DocumentAnalyzer,
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl DocumentPipeline {
    pub fn new(config: AnalyzerConfig) -> Self {
        let analyzer = DocumentAnalyzer::from_config(&config);
        Self {
            config,
            extractor: TextExtractor::new(),
            analyzer,
        }
    }

    /// Swap the extractor, e.g. to run with a reduced set of backends
    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    /// Extract and analyze one document
    pub fn analyze_document(&self, document: &Document) -> Result<AnalysisResult, AppError> {
        self.check_size(document.size())?;

        let text = self.extractor.extract(document).inspect_err(|e| {
            warn!("Extraction failed for {}: {}", document.filename(), e);
        })?;

        self.analyzer.analyze(document.filename(), &text)
    }

    /// Analyze uploaded bytes; the format comes from `filename`'s extension
    pub fn analyze_upload(&self, filename: &str, bytes: Vec<u8>) -> Result<AnalysisResult, AppError> {
        self.check_size(bytes.len() as u64)?;
        let document = Document::from_upload(filename, bytes)?;
        self.analyze_document(&document)
    }

    /// Analyze pasted text
    pub fn analyze_text(&self, name: &str, text: &str) -> Result<AnalysisResult, AppError> {
        let document = Document::from_text(name, text);
        self.analyze_document(&document)
    }

    /// Read a file from disk and analyze it. The size is checked before reading.
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisResult, AppError> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            )));
        }
        self.check_size(metadata.len())?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!("Reading {} ({} bytes)", path.display(), metadata.len());
        let bytes = fs::read(path)?;
        self.analyze_upload(&filename, bytes)
    }

    fn check_size(&self, size: u64) -> Result<(), AppError> {
        if size > self.config.max_file_bytes {
            warn!(
                "Rejecting input of {} bytes (limit {})",
                size, self.config.max_file_bytes
            );
            return Err(AppError::FileTooLarge {
                size,
                limit: self.config.max_file_bytes,
            });
        }
        Ok(())
    }
}
