//! Analyzer configuration.
//!
//! Defaults live in [`AnalyzerConfig::default`]; any field can be overridden with a
//! `DOCANALYZER_*` environment variable (optionally supplied through a `.env` file).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "DOCANALYZER_";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "bunyan" | "json" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Bunyan => write!(f, "bunyan"),
        }
    }
}

/// Tunable constants for extraction and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalyzerConfig {
    /// Uploads above this size are rejected with `FileTooLarge`.
    #[validate(range(min = 1))]
    pub max_file_bytes: u64,
    /// Number of leading sentences used as the summary.
    #[validate(range(min = 1, max = 20))]
    pub summary_sentences: usize,
    /// Summaries longer than this are cut and suffixed with "...".
    #[validate(range(min = 20))]
    pub summary_max_chars: usize,
    /// Maximum number of key topics returned.
    #[validate(range(min = 1, max = 100))]
    pub top_keywords: usize,
    /// Words shorter than this never become key topics.
    #[validate(range(min = 1, max = 20))]
    pub min_keyword_length: usize,
    pub log_format: LogFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            summary_sentences: 2,
            summary_max_chars: 300,
            top_keywords: 8,
            min_keyword_length: 4,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AnalyzerConfig {
    /// Load `.env` (if present), then apply environment overrides on top of the defaults.
    ///
    /// Returns the `.env` path that was read so the caller can log it once the
    /// subscriber is installed.
    pub fn load() -> Result<(Self, Option<PathBuf>), AppError> {
        let env_file = dotenv::dotenv().ok();
        Ok((Self::from_env()?, env_file))
    }

    /// Apply `DOCANALYZER_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(v) = env_override("MAX_FILE_BYTES")? {
            config.max_file_bytes = v;
        }
        if let Some(v) = env_override("SUMMARY_SENTENCES")? {
            config.summary_sentences = v;
        }
        if let Some(v) = env_override("SUMMARY_MAX_CHARS")? {
            config.summary_max_chars = v;
        }
        if let Some(v) = env_override("TOP_KEYWORDS")? {
            config.top_keywords = v;
        }
        if let Some(v) = env_override("MIN_KEYWORD_LENGTH")? {
            config.min_keyword_length = v;
        }
        if let Some(v) = env_override("LOG_FORMAT")? {
            config.log_format = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn env_override<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let name = format!("{}{}", ENV_PREFIX, key);
    match std::env::var(&name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} = {:?}: {}", name, raw, e))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}
