use std::io;
use thiserror::Error;

use crate::models::DocumentFormat;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The file extension is not one the extractor knows how to read.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The content could not be turned into text (corrupt file, missing backend,
    /// image-only PDF, binary data behind a text extension).
    #[error("Failed to extract text from {format}: {reason}")]
    ExtractionFailure { format: String, reason: String },

    /// The upload exceeds the configured size ceiling.
    #[error("File too large: {size} bytes (limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// Nothing left to analyze once the text has been extracted.
    #[error("No text content to analyze")]
    EmptyInput,

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization of an export failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g., out-of-range settings).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub(crate) fn extraction(format: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::ExtractionFailure {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Short message suitable for showing to the person who uploaded the document.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFormat(ext) if ext.is_empty() => {
                "This file has no extension, so its format cannot be determined.".to_string()
            }
            AppError::UnsupportedFormat(ext) => format!(
                "Files of type '.{}' are not supported. Supported types: {}.",
                ext,
                DocumentFormat::supported_extensions().join(", ")
            ),
            AppError::ExtractionFailure { format, reason } => {
                format!("Could not read the {} file: {}", format, reason)
            }
            AppError::FileTooLarge { size, limit } => format!(
                "The file is {} but the limit is {}.",
                human_size(*size),
                human_size(*limit)
            ),
            AppError::EmptyInput => "Please provide some text content to analyze.".to_string(),
            other => other.to_string(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::UnsupportedFormat(s) => AppError::UnsupportedFormat(s.clone()),
            AppError::ExtractionFailure { format, reason } => AppError::ExtractionFailure {
                format: format.clone(),
                reason: reason.clone(),
            },
            AppError::FileTooLarge { size, limit } => AppError::FileTooLarge {
                size: *size,
                limit: *limit,
            },
            AppError::EmptyInput => AppError::EmptyInput,
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Serialization(s) => AppError::Serialization(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

fn human_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KB", b / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}
