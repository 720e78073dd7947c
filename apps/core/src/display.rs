//! Terminal rendering of analysis results.

use std::io::{self, Write};

use crate::analysis::AnalysisResult;
use crate::preflight::CapabilityReport;

/// Key topics rendered as tags
const DISPLAY_TOPICS: usize = 6;

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn bullets(out: &mut impl Write, title: &str, values: &[String]) -> io::Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    heading(out, title)?;
    for value in values {
        writeln!(out, "  • {}", value)?;
    }
    Ok(())
}

/// Render the full analysis view
pub fn render_analysis(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "✅ Analysis Complete: {}", result.filename)?;
    writeln!(out)?;
    writeln!(
        out,
        "  Words: {:<8} Characters: {:<8} Type: {} {:<20} Readability: {:.0}",
        result.word_count,
        result.char_count,
        result.document_type.icon(),
        result.document_type.label(),
        result.readability_score
    )?;

    heading(out, "📋 Summary")?;
    writeln!(out, "{}", result.summary)?;

    let topics = result.top_topics(DISPLAY_TOPICS);
    if !topics.is_empty() {
        heading(out, "🏷️ Key Topics")?;
        let tags = topics
            .iter()
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", tags)?;
    }

    bullets(out, "📅 Dates Found", &result.entities.dates)?;
    bullets(out, "📊 Percentages", &result.entities.percentages)?;
    bullets(out, "📧 Email Addresses", &result.entities.emails)?;
    out.flush()
}

/// Render the optional-feature panel
pub fn render_capabilities(out: &mut impl Write, report: &CapabilityReport) -> io::Result<()> {
    writeln!(out, "{}", report.summary)?;
    for check in &report.checks {
        let mark = if check.passed { "✅" } else { "⚠️" };
        writeln!(out, "  {} {}: {}", mark, check.name, check.message)?;
        if let Some(details) = &check.details {
            writeln!(out, "     {}", details)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DocumentAnalyzer;

    #[test]
    fn test_render_sections() {
        let result = DocumentAnalyzer::new()
            .analyze(
                "memo.txt",
                "Revenue grew 15% in Q3 2024. Contact sales@corp.com for details.",
            )
            .unwrap();

        let mut buf = Vec::new();
        render_analysis(&mut buf, &result).unwrap();
        let view = String::from_utf8(buf).unwrap();

        assert!(view.contains("memo.txt"));
        assert!(view.contains("Business Document"));
        assert!(view.contains("📋 Summary"));
        assert!(view.contains("[revenue]"));
        assert!(view.contains("  • Q3 2024"));
        assert!(view.contains("  • 15%"));
        assert!(view.contains("  • sales@corp.com"));
    }

    #[test]
    fn test_empty_entity_sections_hidden() {
        let result = DocumentAnalyzer::new()
            .analyze("plain.txt", "Nothing special appears inside this sentence.")
            .unwrap();

        let mut buf = Vec::new();
        render_analysis(&mut buf, &result).unwrap();
        let view = String::from_utf8(buf).unwrap();

        assert!(!view.contains("Dates Found"));
        assert!(!view.contains("Email Addresses"));
    }
}
