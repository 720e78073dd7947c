//! Export Tests
//!
//! JSON report shape, text report layout and files written to disk.

use chrono::{Local, TimeZone};
use serde_json::Value;
use std::time::Duration;

use crate::analysis::{AnalysisResult, DocumentAnalyzer};
use crate::export::{self, JsonReport, ReportMeta};
use crate::samples::Sample;

fn revenue_result() -> AnalysisResult {
    DocumentAnalyzer::new()
        .analyze(
            "q3.txt",
            "Revenue grew 15% in Q3 2024. Contact sales@corp.com for details.",
        )
        .unwrap()
}

fn meta() -> ReportMeta {
    ReportMeta {
        generated_at: Local.with_ymd_and_hms(2024, 10, 1, 9, 30, 0).unwrap(),
        processing_time: Duration::from_millis(1234),
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let result = revenue_result();
        let json: Value = serde_json::from_str(&export::to_json(&result, &meta()).unwrap()).unwrap();

        let info = &json["document_info"];
        for key in [
            "filename",
            "word_count",
            "document_type",
            "char_count",
            "readability_score",
            "analysis_date",
            "processing_time",
        ] {
            assert!(info.get(key).is_some(), "missing document_info.{}", key);
        }

        let data = &json["extracted_data"];
        for key in [
            "summary",
            "key_topics",
            "dates",
            "percentages",
            "email_addresses",
            "numbers",
        ] {
            assert!(data.get(key).is_some(), "missing extracted_data.{}", key);
        }
    }

    #[test]
    fn test_json_values_mirror_result() {
        let result = revenue_result();
        let json: Value = serde_json::from_str(&export::to_json(&result, &meta()).unwrap()).unwrap();

        assert_eq!(json["document_info"]["filename"], "q3.txt");
        assert_eq!(
            json["document_info"]["word_count"].as_u64(),
            Some(result.word_count as u64)
        );
        assert_eq!(json["document_info"]["document_type"], "Business Document");
        assert_eq!(json["document_info"]["analysis_date"], "2024-10-01 09:30:00");
        assert_eq!(json["document_info"]["processing_time"], "1.23s");
        assert_eq!(json["extracted_data"]["email_addresses"][0], "sales@corp.com");
        assert_eq!(json["extracted_data"]["percentages"][0], "15%");
    }

    #[test]
    fn test_report_reads_back() {
        let result = DocumentAnalyzer::new()
            .analyze("paper.txt", Sample::ResearchPaper.text())
            .unwrap();
        let text = export::to_json(&result, &meta()).unwrap();

        let report: JsonReport = serde_json::from_str(&text).unwrap();
        assert_eq!(report, JsonReport::new(&result, &meta()));
        assert_eq!(report.extracted_data.key_topics, result.key_topics);
    }
}

#[cfg(test)]
mod text_report_tests {
    use super::*;

    #[test]
    fn test_text_report_layout() {
        let result = revenue_result();
        let report = export::to_text_report(&result, &meta());

        assert!(report.starts_with("Document Analysis Report\n"));
        assert!(report.contains("File: q3.txt\n"));
        assert!(report.contains("Date: 2024-10-01 09:30:00\n"));
        assert!(report.contains(&format!("- Words: {}\n", result.word_count)));
        assert!(report.contains("- Type: Business Document\n"));
        assert!(report.contains(&format!("- Readability: {:.1}\n", result.readability_score)));
        assert!(report.contains("Dates: Q3 2024, 2024\n"));
        assert!(report.contains("Percentages: 15%\n"));
        assert!(report.contains("Emails: sales@corp.com\n"));
    }

    #[test]
    fn test_text_report_lists_at_most_six_topics() {
        let result = DocumentAnalyzer::new()
            .analyze("paper.txt", Sample::ResearchPaper.text())
            .unwrap();
        assert_eq!(result.key_topics.len(), 8);

        let report = export::to_text_report(&result, &meta());
        let topics_line = report
            .lines()
            .skip_while(|l| *l != "KEY TOPICS:")
            .nth(1)
            .unwrap();
        assert_eq!(topics_line.split(", ").count(), 6);
        assert!(!topics_line.contains(&result.key_topics[7]));
    }

    #[test]
    fn test_empty_entities_shown_as_none() {
        let result = DocumentAnalyzer::new()
            .analyze("plain.txt", "Nothing special appears inside this sentence.")
            .unwrap();
        let report = export::to_text_report(&result, &meta());

        assert!(report.contains("Dates: None\n"));
        assert!(report.contains("Percentages: None\n"));
        assert!(report.contains("Emails: None\n"));
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_write_exports() {
        let dir = tempfile::tempdir().unwrap();
        let result = revenue_result();

        let paths = export::write_exports(&result, dir.path(), &meta()).unwrap();

        assert_eq!(paths.json, dir.path().join("analysis_q3.txt.json"));
        assert_eq!(paths.text, dir.path().join("summary_q3.txt.txt"));

        let json = std::fs::read_to_string(&paths.json).unwrap();
        let report: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.document_info.word_count, result.word_count);

        let text = std::fs::read_to_string(&paths.text).unwrap();
        assert_eq!(text, export::to_text_report(&result, &meta()));
    }

    #[test]
    fn test_export_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("today");

        let paths = export::write_exports(&revenue_result(), &nested, &meta()).unwrap();
        assert!(paths.json.exists());
        assert!(paths.text.exists());
    }

    #[test]
    fn test_export_name_stays_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = DocumentAnalyzer::new()
            .analyze("../../escape.txt", "Some words here.")
            .unwrap();

        let paths = export::write_exports(&result, dir.path(), &meta()).unwrap();
        assert_eq!(paths.json, dir.path().join("analysis_escape.txt.json"));
    }
}
