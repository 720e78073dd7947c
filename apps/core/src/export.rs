//! JSON and plain-text exports of an analysis.
//!
//! Exports only reshape an [`AnalysisResult`]; the values they add (generation
//! timestamp and processing time) come from the caller through [`ReportMeta`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::analysis::{AnalysisResult, DocumentType};
use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of key topics listed in the text report
const TEXT_REPORT_TOPICS: usize = 6;

/// When the report was generated and how long the analysis took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportMeta {
    pub generated_at: DateTime<Local>,
    pub processing_time: Duration,
}

impl ReportMeta {
    /// Stamp a report generated now for an analysis that took `processing_time`
    pub fn now(processing_time: Duration) -> Self {
        Self {
            generated_at: Local::now(),
            processing_time,
        }
    }

    fn analysis_date(&self) -> String {
        self.generated_at.format(DATE_FORMAT).to_string()
    }

    /// Seconds with two decimals, e.g. `0.04s`
    fn processing_time_label(&self) -> String {
        format!("{:.2}s", self.processing_time.as_secs_f64())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub word_count: usize,
    pub document_type: DocumentType,
    pub char_count: usize,
    pub readability_score: f64,
    pub analysis_date: String,
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub summary: String,
    pub key_topics: Vec<String>,
    pub dates: Vec<String>,
    pub percentages: Vec<String>,
    pub email_addresses: Vec<String>,
    pub numbers: Vec<String>,
}

/// Shape of the downloadable JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub document_info: DocumentInfo,
    pub extracted_data: ExtractedData,
}

impl JsonReport {
    pub fn new(result: &AnalysisResult, meta: &ReportMeta) -> Self {
        Self {
            document_info: DocumentInfo {
                filename: result.filename.clone(),
                word_count: result.word_count,
                document_type: result.document_type,
                char_count: result.char_count,
                readability_score: result.readability_score,
                analysis_date: meta.analysis_date(),
                processing_time: meta.processing_time_label(),
            },
            extracted_data: ExtractedData {
                summary: result.summary.clone(),
                key_topics: result.key_topics.clone(),
                dates: result.entities.dates.clone(),
                percentages: result.entities.percentages.clone(),
                email_addresses: result.entities.emails.clone(),
                numbers: result.entities.numbers.clone(),
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pretty-printed JSON report
pub fn to_json(result: &AnalysisResult, meta: &ReportMeta) -> Result<String, AppError> {
    JsonReport::new(result, meta).to_json_pretty()
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

/// Flat, labeled plain-text report
pub fn to_text_report(result: &AnalysisResult, meta: &ReportMeta) -> String {
    let rule = "=".repeat(37);
    let mut report = String::new();

    report.push_str("Document Analysis Report\n");
    report.push_str(&rule);
    report.push('\n');
    report.push_str(&format!("File: {}\n", result.filename));
    report.push_str(&format!("Date: {}\n\n", meta.analysis_date()));

    report.push_str("STATISTICS:\n");
    report.push_str(&format!("- Words: {}\n", result.word_count));
    report.push_str(&format!("- Characters: {}\n", result.char_count));
    report.push_str(&format!("- Type: {}\n", result.document_type));
    report.push_str(&format!("- Readability: {:.1}\n\n", result.readability_score));

    report.push_str("SUMMARY:\n");
    report.push_str(&result.summary);
    report.push_str("\n\n");

    report.push_str("KEY TOPICS:\n");
    report.push_str(&join_or_none(result.top_topics(TEXT_REPORT_TOPICS)));
    report.push_str("\n\n");

    report.push_str("EXTRACTED ENTITIES:\n");
    report.push_str(&format!("Dates: {}\n", join_or_none(&result.entities.dates)));
    report.push_str(&format!(
        "Percentages: {}\n",
        join_or_none(&result.entities.percentages)
    ));
    report.push_str(&format!("Emails: {}\n", join_or_none(&result.entities.emails)));

    report
}

/// Keep only the final path component so a crafted name cannot escape the export dir
fn safe_name(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        "document".to_string()
    } else {
        base.to_string()
    }
}

pub fn json_file_name(filename: &str) -> String {
    format!("analysis_{}.json", safe_name(filename))
}

pub fn text_file_name(filename: &str) -> String {
    format!("summary_{}.txt", safe_name(filename))
}

/// Files written by [`write_exports`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// Write both reports into `dir`, creating it when needed
pub fn write_exports(
    result: &AnalysisResult,
    dir: &Path,
    meta: &ReportMeta,
) -> Result<ExportPaths, AppError> {
    fs::create_dir_all(dir)?;

    let json = dir.join(json_file_name(&result.filename));
    fs::write(&json, to_json(result, meta)?)?;

    let text = dir.join(text_file_name(&result.filename));
    fs::write(&text, to_text_report(result, meta))?;

    info!("Exported {} and {}", json.display(), text.display());
    Ok(ExportPaths { json, text })
}
