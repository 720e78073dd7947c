//! Text extraction module for various file formats
//! Supports: TXT, MD, CSV, JSON, code files, PDF, DOCX
//!
//! Each format is served by a [`TextBackend`]. PDF and DOCX backends wrap optional
//! libraries (cargo features `pdf` and `docx`); a backend compiled without its
//! library reports itself unavailable and extraction fails cleanly instead.

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{Document, DocumentContent, DocumentFormat};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A strategy that turns raw bytes of one format into plain text.
pub trait TextBackend: Send + Sync {
    /// Format this backend handles
    fn format(&self) -> DocumentFormat;

    /// Name of the library (or decoder) behind the backend
    fn name(&self) -> &'static str;

    /// Whether the backend can run in this build
    fn is_available(&self) -> bool;

    fn extract(&self, file_data: &[u8]) -> Result<String, AppError>;
}

/// UTF-8 decoder for text and code files.
pub struct PlainTextBackend {
    format: DocumentFormat,
}

impl PlainTextBackend {
    pub fn new(format: DocumentFormat) -> Self {
        Self { format }
    }
}

impl TextBackend for PlainTextBackend {
    fn format(&self) -> DocumentFormat {
        self.format
    }

    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn extract(&self, file_data: &[u8]) -> Result<String, AppError> {
        decode_text(file_data, self.format)
    }
}

/// PDF text layer extraction through `pdf-extract`.
pub struct PdfBackend;

impl TextBackend for PdfBackend {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "pdf")
    }

    #[cfg(feature = "pdf")]
    fn extract(&self, file_data: &[u8]) -> Result<String, AppError> {
        extract_pdf_text(file_data)
    }

    #[cfg(not(feature = "pdf"))]
    fn extract(&self, _file_data: &[u8]) -> Result<String, AppError> {
        Err(unavailable(self))
    }
}

/// DOCX paragraph extraction through `docx-rs`.
pub struct DocxBackend;

impl TextBackend for DocxBackend {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &'static str {
        "docx-rs"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "docx")
    }

    #[cfg(feature = "docx")]
    fn extract(&self, file_data: &[u8]) -> Result<String, AppError> {
        extract_docx_text(file_data)
    }

    #[cfg(not(feature = "docx"))]
    fn extract(&self, _file_data: &[u8]) -> Result<String, AppError> {
        Err(unavailable(self))
    }
}

fn unavailable(backend: &dyn TextBackend) -> AppError {
    AppError::extraction(
        backend.format().label(),
        format!(
            "{} support is not available in this build (missing {})",
            backend.format().label(),
            backend.name()
        ),
    )
}

/// Registry of backends, one per format.
pub struct TextExtractor {
    backends: Vec<Box<dyn TextBackend>>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// Create an extractor with every built-in backend registered
    pub fn new() -> Self {
        Self::with_backends(vec![
            Box::new(PdfBackend),
            Box::new(DocxBackend),
            Box::new(PlainTextBackend::new(DocumentFormat::Text)),
            Box::new(PlainTextBackend::new(DocumentFormat::Code)),
        ])
    }

    /// Create an extractor from an explicit backend list. When two backends claim the
    /// same format, the first one wins.
    pub fn with_backends(backends: Vec<Box<dyn TextBackend>>) -> Self {
        Self { backends }
    }

    pub fn backend_for(&self, format: DocumentFormat) -> Option<&dyn TextBackend> {
        self.backends
            .iter()
            .find(|b| b.format() == format)
            .map(|b| b.as_ref())
    }

    pub fn is_available(&self, format: DocumentFormat) -> bool {
        self.backend_for(format).is_some_and(|b| b.is_available())
    }

    pub fn backends(&self) -> impl Iterator<Item = &dyn TextBackend> {
        self.backends.iter().map(|b| b.as_ref())
    }

    /// Extract the text of a document. Pasted text passes through unchanged.
    pub fn extract(&self, document: &Document) -> Result<String, AppError> {
        match document.content() {
            DocumentContent::Text(text) => Ok(text.clone()),
            DocumentContent::Bytes(bytes) => {
                info!(
                    "Extracting text from file: {} (type: {})",
                    document.filename(),
                    document.format()
                );
                self.extract_bytes(document.format(), bytes)
            }
        }
    }

    /// Extract text from raw bytes of a known format.
    pub fn extract_bytes(
        &self,
        format: DocumentFormat,
        file_data: &[u8],
    ) -> Result<String, AppError> {
        let backend = self.backend_for(format).ok_or_else(|| {
            AppError::extraction(format.label(), "no extraction backend registered")
        })?;

        if !backend.is_available() {
            warn!("{} backend '{}' is not available", format, backend.name());
            return Err(unavailable(backend));
        }

        backend.extract(file_data)
    }
}

/// Extract text content from binary file data based on file extension
pub fn extract_text_from_file(file_name: &str, file_data: &[u8]) -> Result<String, AppError> {
    let document = Document::from_upload(file_name, file_data.to_vec())?;
    TextExtractor::new().extract(&document)
}

/// MIME type for a file name, falling back to `application/octet-stream`.
pub fn get_mime_type(file_name: &str) -> &'static str {
    DocumentFormat::from_filename(file_name)
        .map(|f| f.mime_type())
        .unwrap_or("application/octet-stream")
}

/// Decode text or code bytes. Invalid UTF-8 sequences are dropped; valid
/// characters, U+FFFD included, are kept.
fn decode_text(file_data: &[u8], format: DocumentFormat) -> Result<String, AppError> {
    if file_data.contains(&0) {
        let kind = infer::get(file_data)
            .map(|t| t.mime_type())
            .unwrap_or("unknown binary data");
        return Err(AppError::extraction(
            format.label(),
            format!("content is binary ({})", kind),
        ));
    }

    let data = file_data.strip_prefix(UTF8_BOM).unwrap_or(file_data);
    match std::str::from_utf8(data) {
        Ok(text) => Ok(text.to_string()),
        Err(e) => {
            warn!("Invalid UTF-8 in {} file, dropping bad bytes: {}", format, e);
            Ok(data.utf8_chunks().map(|chunk| chunk.valid()).collect())
        }
    }
}

/// Reject content whose magic bytes contradict the declared format.
#[cfg(any(feature = "pdf", feature = "docx"))]
fn check_signature(file_data: &[u8], format: DocumentFormat) -> Result<(), AppError> {
    let detected = infer::get(file_data).map(|t| t.mime_type());
    let matches = match format {
        DocumentFormat::Pdf => detected == Some("application/pdf"),
        DocumentFormat::Docx => {
            detected == Some(DocumentFormat::Docx.mime_type()) || detected == Some("application/zip")
        }
        DocumentFormat::Text | DocumentFormat::Code => true,
    };

    if matches {
        Ok(())
    } else {
        Err(AppError::extraction(
            format.label(),
            format!(
                "content does not look like a {} file (detected: {})",
                format.label(),
                detected.unwrap_or("unknown data")
            ),
        ))
    }
}

/// Extract text from PDF file
#[cfg(feature = "pdf")]
fn extract_pdf_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from PDF...");
    check_signature(file_data, DocumentFormat::Pdf)?;

    // pdf-extract panics on some malformed files
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(file_data));

    match outcome {
        Ok(Ok(text)) => {
            let cleaned = clean_extracted_text(&text);
            if cleaned.is_empty() {
                warn!("PDF has no text layer");
                return Err(AppError::extraction(
                    "PDF",
                    "no embedded text found (image-only or scanned PDF)",
                ));
            }
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::extraction("PDF", e.to_string()))
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            Err(AppError::extraction("PDF", "the file is corrupt or unreadable"))
        }
    }
}

/// Extract text from DOCX file
#[cfg(feature = "docx")]
fn extract_docx_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from DOCX...");
    check_signature(file_data, DocumentFormat::Docx)?;

    match docx_rs::read_docx(file_data) {
        Ok(docx) => {
            let mut text_parts: Vec<String> = Vec::new();

            for child in docx.document.children {
                if let docx_rs::DocumentChild::Paragraph(para) = child {
                    let para_text: String = para
                        .children
                        .iter()
                        .filter_map(|pc| match pc {
                            docx_rs::ParagraphChild::Run(run) => Some(run_text(run)),
                            _ => None,
                        })
                        .collect();

                    if !para_text.trim().is_empty() {
                        text_parts.push(para_text);
                    }
                }
            }

            let text = text_parts.join("\n");
            let cleaned = clean_extracted_text(&text);
            info!("DOCX extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("DOCX extraction failed: {}", e);
            Err(AppError::extraction("DOCX", e.to_string()))
        }
    }
}

#[cfg(feature = "docx")]
fn run_text(run: &docx_rs::Run) -> String {
    run.children
        .iter()
        .filter_map(|rc| match rc {
            docx_rs::RunChild::Text(t) => Some(t.text.clone()),
            docx_rs::RunChild::Tab(_) => Some("\t".to_string()),
            _ => None,
        })
        .collect()
}

/// Clean up extracted text
#[cfg_attr(not(any(feature = "pdf", feature = "docx")), allow(dead_code))]
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
