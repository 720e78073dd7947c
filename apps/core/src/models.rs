use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::AppError;

/// Format of an uploaded document, decided from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Code,
}

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "csv", "json", "log"];
const CODE_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "html", "htm", "css", "rs", "toml", "yaml", "yml",
];

impl DocumentFormat {
    /// Every extension accepted for upload, in the order shown to users.
    pub fn supported_extensions() -> Vec<&'static str> {
        let mut all = vec!["pdf", "docx"];
        all.extend_from_slice(TEXT_EXTENSIONS);
        all.extend_from_slice(CODE_EXTENSIONS);
        all
    }

    /// Map a lowercase extension (without the dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            e if TEXT_EXTENSIONS.contains(&e) => Some(DocumentFormat::Text),
            e if CODE_EXTENSIONS.contains(&e) => Some(DocumentFormat::Code),
            _ => None,
        }
    }

    /// Detect the format from a file name, failing with `UnsupportedFormat`.
    pub fn from_filename(file_name: &str) -> Result<Self, AppError> {
        let extension = extension_of(file_name);
        Self::from_extension(&extension).ok_or(AppError::UnsupportedFormat(extension))
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::Text => "text",
            DocumentFormat::Code => "code",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Text | DocumentFormat::Code => "text/plain",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercased extension of `file_name`, or an empty string when it has none.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Raw content of a document as it arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    /// An uploaded file
    Bytes(Vec<u8>),
    /// Pasted text
    Text(String),
}

/// A single upload, immutable once created and dropped after one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    filename: String,
    content: DocumentContent,
    format: DocumentFormat,
}

impl Document {
    /// Wrap uploaded bytes; the format comes from the file extension.
    pub fn from_upload(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, AppError> {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename)?;
        Ok(Self {
            filename,
            content: DocumentContent::Bytes(bytes),
            format,
        })
    }

    /// Wrap pasted text. A name with a code extension keeps the `Code` format;
    /// anything else is treated as plain text.
    pub fn from_text(filename: impl Into<String>, text: impl Into<String>) -> Self {
        let filename = filename.into();
        let format = match DocumentFormat::from_filename(&filename) {
            Ok(DocumentFormat::Code) => DocumentFormat::Code,
            _ => DocumentFormat::Text,
        };
        Self {
            filename,
            content: DocumentContent::Text(text.into()),
            format,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn content(&self) -> &DocumentContent {
        &self.content
    }

    /// Size of the raw content in bytes.
    pub fn size(&self) -> u64 {
        match &self.content {
            DocumentContent::Bytes(b) => b.len() as u64,
            DocumentContent::Text(t) => t.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("a.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("b.docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_filename("notes.md").unwrap(), DocumentFormat::Text);
        assert_eq!(DocumentFormat::from_filename("main.py").unwrap(), DocumentFormat::Code);
    }

    #[test]
    fn test_unsupported_extension() {
        match DocumentFormat::from_filename("setup.exe") {
            Err(AppError::UnsupportedFormat(ext)) => assert_eq!(ext, "exe"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
        assert!(DocumentFormat::from_filename("README").is_err());
    }

    #[test]
    fn test_pasted_text_format() {
        let doc = Document::from_text("pasted_text.txt", "hello");
        assert_eq!(doc.format(), DocumentFormat::Text);

        let doc = Document::from_text("snippet.rs", "fn main() {}");
        assert_eq!(doc.format(), DocumentFormat::Code);

        let doc = Document::from_text("untitled", "hello");
        assert_eq!(doc.format(), DocumentFormat::Text);
        assert_eq!(doc.size(), 5);
    }

    #[test]
    fn test_doc_extension_is_not_docx() {
        assert!(DocumentFormat::from_filename("legacy.doc").is_err());
    }
}
